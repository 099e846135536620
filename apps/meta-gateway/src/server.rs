//! gRPC server initialization and lifecycle management
//!
//! This module handles all server setup:
//! - Tracing initialization
//! - Upstream clients (vector backend, metadata store) on lazy channels
//! - Resolver, cache and connection monitor
//! - gRPC server configuration, startup and graceful shutdown
//! - Health check service (grpc.health.v1.Health)

use std::sync::Arc;

use core_config::server::ServerConfig;
use core_config::{Environment, FromEnv};
use core_grpc::MAX_MESSAGE_SIZE;
use domain_meta::{
    GatewayConfig, GrpcMetaStore, GrpcVectorBackend, MetaGateway, MetaResolver, TtlCache,
};
use eyre::{Result, WrapErr};
use rpc::gateway::v1::vector_gateway_server::{SERVICE_NAME, VectorGatewayServer};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info};

use crate::service::MetaGatewayService;

/// Run the gateway until Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is invalid
/// - The listen address cannot be bound
/// - Server runtime encounters an error
pub async fn run() -> Result<()> {
    // Initialize tracing (env-aware: JSON for prod, pretty for dev)
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let server = ServerConfig::from_env().wrap_err("Failed to load server configuration")?;
    let config = GatewayConfig::from_env().wrap_err("Failed to load gateway configuration")?;

    let addr = server
        .socket_addr()
        .wrap_err("Failed to parse server address")?;
    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let serving = serve(config, listener, shutdown_rx);
    tokio::pin!(serving);

    tokio::select! {
        res = &mut serving => return res,
        signal = tokio::signal::ctrl_c() => {
            signal.wrap_err("Failed to listen for shutdown signal")?;
            info!("Shutdown signal received, draining in-flight requests");
        }
    }

    let _ = shutdown_tx.send(true);
    serving.await?;

    info!("Meta gateway shutdown complete");
    Ok(())
}

/// Wire the upstream clients, resolver and orchestrator from configuration
///
/// Channels are lazy: nothing is dialed until the first request.
pub fn build_gateway(config: &GatewayConfig) -> Result<MetaGateway<GrpcVectorBackend, GrpcMetaStore>> {
    let backend = GrpcVectorBackend::connect_lazy(&config.backend_addr, config.channel.clone())
        .wrap_err_with(|| format!("Invalid vector backend address: {}", config.backend_addr))?;
    let store = GrpcMetaStore::connect_lazy(&config.meta_addr, config.channel.clone())
        .wrap_err_with(|| format!("Invalid metadata store address: {}", config.meta_addr))?;

    let mut resolver = MetaResolver::new(store).with_monitor_interval(config.monitor_interval);
    if let Some(cache) = &config.cache {
        resolver = resolver.with_cache(Arc::new(TtlCache::new(cache.clone())));
    }

    Ok(MetaGateway::new(backend, resolver).with_dimensions(config.dimensions.clone()))
}

/// Serve the gateway on `listener` until `shutdown` flips to `true`
///
/// Background tasks (cache eviction, store monitor) stop on the same signal.
pub async fn serve(
    config: GatewayConfig,
    listener: TcpListener,
    shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let gateway = build_gateway(&config)?;

    let mut monitor = gateway.resolver().start(shutdown.clone());
    tokio::spawn(async move {
        while let Some(err) = monitor.recv().await {
            error!(error = %err, "Metadata store connection unhealthy");
        }
    });

    // Create health reporter for Kubernetes health checks
    let (health_reporter, health_service) = health_reporter();
    health_reporter
        .set_service_status(SERVICE_NAME, tonic_health::ServingStatus::Serving)
        .await;
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    let addr = listener
        .local_addr()
        .wrap_err("Failed to read listener address")?;
    info!(
        %addr,
        backend = %config.backend_addr,
        meta = %config.meta_addr,
        cache = config.cache.is_some(),
        stream_concurrency = config.stream_concurrency,
        "VectorGateway listening"
    );

    let service = MetaGatewayService::new(gateway, config.stream_concurrency);

    Server::builder()
        .add_service(health_service)
        .add_service(
            VectorGatewayServer::new(service)
                .accept_compressed(CompressionEncoding::Zstd)
                .send_compressed(CompressionEncoding::Zstd)
                .max_decoding_message_size(MAX_MESSAGE_SIZE)
                .max_encoding_message_size(MAX_MESSAGE_SIZE),
        )
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown_requested(shutdown))
        .await
        .wrap_err("gRPC server failed")?;

    Ok(())
}

/// Resolves once `shutdown` is `true` or its sender is gone.
async fn shutdown_requested(mut shutdown: watch::Receiver<bool>) {
    while !*shutdown.borrow_and_update() {
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
