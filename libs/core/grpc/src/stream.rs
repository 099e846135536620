//! Bidirectional stream adapter.
//!
//! Every decoded request is handed to a handler on its own task, with at most
//! `concurrency` handlers in flight. Each request produces exactly one response
//! message: a handler error is folded into the response envelope (see the
//! `From<Result<_, Status>>` impls in `rpc::stream`) and the stream keeps going.
//!
//! The stream ends when:
//! - the client half-closes: in-flight handlers finish and their responses are
//!   delivered first
//! - a receive error other than end-of-stream occurs: in-flight handlers finish,
//!   then the error is sent as the terminal item
//! - the client goes away (response receiver dropped): no new requests are
//!   accepted and in-flight handlers run to completion

use std::future::Future;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio_stream::wrappers::ReceiverStream;
use tonic::Status;
use tracing::{debug, error, warn};

/// Default bound on concurrently running stream handlers.
pub const DEFAULT_STREAM_CONCURRENCY: usize = 20;

/// Response stream type returned to tonic for `Stream*` methods.
pub type ResponseStream<T> = ReceiverStream<Result<T, Status>>;

/// Adapt an inbound request stream into a response stream.
///
/// `Out` is the wire envelope (e.g. `StreamLocation`) built from the handler's
/// result.
pub fn bidirectional_stream<S, Req, Resp, Out, F, Fut>(
  inbound: S,
  concurrency: usize,
  handler: F,
) -> ResponseStream<Out>
where
  S: Stream<Item = Result<Req, Status>> + Send + Unpin + 'static,
  Req: Send + 'static,
  Resp: Send + 'static,
  Out: From<Result<Resp, Status>> + Send + 'static,
  F: Fn(Req) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Resp, Status>> + Send + 'static,
{
  let concurrency = concurrency.max(1);
  let (tx, rx) = mpsc::channel(concurrency);
  tokio::spawn(drive(inbound, concurrency, Arc::new(handler), tx));
  ReceiverStream::new(rx)
}

async fn drive<S, Req, Resp, Out, F, Fut>(
  mut inbound: S,
  concurrency: usize,
  handler: Arc<F>,
  tx: mpsc::Sender<Result<Out, Status>>,
) where
  S: Stream<Item = Result<Req, Status>> + Send + Unpin + 'static,
  Req: Send + 'static,
  Resp: Send + 'static,
  Out: From<Result<Resp, Status>> + Send + 'static,
  F: Fn(Req) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Resp, Status>> + Send + 'static,
{
  let limiter = Arc::new(Semaphore::new(concurrency));
  let mut in_flight = JoinSet::new();
  let mut terminal: Option<Status> = None;

  loop {
    let permit = tokio::select! {
      _ = tx.closed() => {
        debug!("stream receiver dropped, no longer accepting requests");
        break;
      }
      permit = limiter.clone().acquire_owned() => match permit {
        Ok(permit) => permit,
        Err(_) => break,
      },
    };

    let next = tokio::select! {
      _ = tx.closed() => {
        debug!("stream receiver dropped, no longer accepting requests");
        break;
      }
      next = inbound.next() => next,
    };

    match next {
      Some(Ok(req)) => {
        let handler = handler.clone();
        let tx = tx.clone();
        in_flight.spawn(async move {
          // a panicking handler still owes the client one response
          let result = match tokio::spawn((*handler)(req)).await {
            Ok(result) => result,
            Err(e) => {
              error!(error = %e, "stream handler failed");
              Err(Status::internal(format!("stream handler failed: {e}")))
            }
          };
          if tx.send(Ok(Out::from(result))).await.is_err() {
            debug!("stream receiver dropped before response was delivered");
          }
          drop(permit);
        });
      }
      Some(Err(status)) => {
        if status.code() != tonic::Code::Cancelled {
          warn!(code = ?status.code(), message = status.message(), "stream receive failed");
        }
        terminal = Some(status);
        break;
      }
      None => break,
    }

    while in_flight.try_join_next().is_some() {}
  }

  while in_flight.join_next().await.is_some() {}

  if let Some(status) = terminal {
    let _ = tx.send(Err(status)).await;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::time::Duration;

  #[derive(Debug)]
  struct Envelope(Result<u32, Status>);

  impl From<Result<u32, Status>> for Envelope {
    fn from(result: Result<u32, Status>) -> Self {
      Envelope(result)
    }
  }

  fn requests(items: Vec<Result<u32, Status>>) -> impl Stream<Item = Result<u32, Status>> + Unpin {
    tokio_stream::iter(items)
  }

  #[tokio::test]
  async fn test_one_response_per_request() {
    let inbound = requests((0..50).map(Ok).collect());
    let out: Vec<_> = bidirectional_stream(inbound, 4, |x: u32| async move { Ok(x * 2) })
      .collect()
      .await;

    assert_eq!(out.len(), 50);
    let mut values: Vec<u32> = out
      .into_iter()
      .map(|item| match item {
        Ok(Envelope(Ok(v))) => v,
        other => panic!("unexpected item: {:?}", other),
      })
      .collect();
    values.sort_unstable();
    assert_eq!(values, (0..50).map(|x| x * 2).collect::<Vec<_>>());
  }

  #[tokio::test]
  async fn test_item_error_does_not_end_stream() {
    let inbound = requests(vec![Ok(1), Ok(2), Ok(3)]);
    let out: Vec<_> = bidirectional_stream(inbound, 2, |x: u32| async move {
      if x == 2 {
        Err(Status::already_exists("2"))
      } else {
        Ok(x)
      }
    })
    .collect()
    .await;

    assert_eq!(out.len(), 3);
    let failures = out
      .iter()
      .filter(|item| matches!(item, Ok(Envelope(Err(s))) if s.code() == tonic::Code::AlreadyExists))
      .count();
    assert_eq!(failures, 1);
  }

  #[tokio::test]
  async fn test_concurrency_is_bounded() {
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let (r, p) = (running.clone(), peak.clone());

    let inbound = requests((0..40).map(Ok).collect());
    let out: Vec<Result<Envelope, Status>> = bidirectional_stream(inbound, 3, move |x: u32| {
      let running = r.clone();
      let peak = p.clone();
      async move {
        let now = running.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;
        running.fetch_sub(1, Ordering::SeqCst);
        Ok(x)
      }
    })
    .collect()
    .await;

    assert_eq!(out.len(), 40);
    assert!(peak.load(Ordering::SeqCst) <= 3);
    assert!(peak.load(Ordering::SeqCst) >= 1);
  }

  #[tokio::test]
  async fn test_receive_error_terminates_after_in_flight() {
    let inbound = requests(vec![Ok(1), Ok(2), Err(Status::data_loss("broken")), Ok(4)]);
    let out: Vec<_> = bidirectional_stream(inbound, 8, |x: u32| async move {
      tokio::time::sleep(Duration::from_millis(10)).await;
      Ok(x)
    })
    .collect()
    .await;

    assert_eq!(out.len(), 3);
    assert!(out[..2].iter().all(|item| matches!(item, Ok(Envelope(Ok(_))))));
    assert!(matches!(&out[2], Err(s) if s.code() == tonic::Code::DataLoss));
  }

  #[tokio::test]
  async fn test_panicking_handler_still_answers() {
    let inbound = requests(vec![Ok(7)]);
    let out: Vec<_> = bidirectional_stream(inbound, 1, |x: u32| async move {
      if x == 7 {
        panic!("boom");
      }
      Ok(x)
    })
    .collect()
    .await;

    assert_eq!(out.len(), 1);
    assert!(matches!(&out[0], Ok(Envelope(Err(s))) if s.code() == tonic::Code::Internal));
  }

  #[tokio::test]
  async fn test_empty_input_closes_immediately() {
    let out: Vec<Result<Envelope, Status>> = bidirectional_stream(requests(vec![]), 2, |x: u32| async move { Ok(x) })
      .collect()
      .await;
    assert!(out.is_empty());
  }
}
