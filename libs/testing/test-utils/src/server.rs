//! Ephemeral gRPC server harness
//!
//! Binds `127.0.0.1:0`, serves a tonic router on the listener and stops it
//! when the handle is dropped.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::server::Router;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;

/// A running in-process gRPC server
///
/// The server is shut down when this struct is dropped.
pub struct TestServer {
    addr: SocketAddr,
    health: HealthReporter,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub(crate) async fn start(router: Router, health: HealthReporter) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener
            .local_addr()
            .expect("Failed to read test listener address");

        let (shutdown, signal) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let incoming = TcpListenerStream::new(listener);
            let signal = async {
                let _ = signal.await;
            };
            if let Err(e) = router.serve_with_incoming_shutdown(incoming, signal).await {
                tracing::error!(error = %e, "Test gRPC server failed");
            }
        });

        tracing::info!(%addr, "Test gRPC server ready");

        Self {
            addr,
            health,
            shutdown: Some(shutdown),
        }
    }

    /// `http://` endpoint for client channels
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Flip the overall (`""`) health status reported by this server
    pub async fn set_serving(&self, serving: bool) {
        let status = if serving {
            ServingStatus::Serving
        } else {
            ServingStatus::NotServing
        };
        self.health.set_service_status("", status).await;
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            tracing::debug!(addr = %self.addr, "Stopping test gRPC server");
            let _ = tx.send(());
        }
    }
}
