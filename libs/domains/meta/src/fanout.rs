//! Structured fan-out for batched operations.

use std::future::Future;

use tokio::task::JoinSet;
use tracing::warn;

use crate::error::{MetaError, MetaResult};

/// A batch result: every slot that succeeded is populated, failed slots hold
/// `T::default()`, and all failures are chained into `error`.
#[derive(Debug)]
pub struct Partial<T> {
    pub value: T,
    pub error: Option<MetaError>,
}

impl<T> Partial<T> {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Drop the partial value if anything failed.
    pub fn into_result(self) -> MetaResult<T> {
        match self.error {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Partial<U> {
        Partial {
            value: f(self.value),
            error: self.error,
        }
    }
}

/// Run `f` over every item concurrently, keeping results at their input index.
///
/// All tasks are owned by a `JoinSet`; dropping the returned future aborts
/// the ones still running. Errors are chained in input order.
pub async fn fan_out<T, R, F, Fut>(items: Vec<T>, f: F) -> Partial<Vec<R>>
where
    T: Send + 'static,
    R: Default + Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = MetaResult<R>> + Send + 'static,
{
    let mut values: Vec<R> = std::iter::repeat_with(R::default).take(items.len()).collect();
    let mut tasks = JoinSet::new();
    for (idx, item) in items.into_iter().enumerate() {
        let fut = f(item);
        tasks.spawn(async move { (idx, fut.await) });
    }

    let mut errors: Vec<(usize, MetaError)> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((idx, Ok(value))) => values[idx] = value,
            Ok((idx, Err(err))) => errors.push((idx, err)),
            Err(e) => {
                warn!(error = %e, "fan-out task failed");
                errors.push((usize::MAX, MetaError::Internal(format!("fan-out task failed: {e}"))));
            }
        }
    }
    errors.sort_by_key(|(idx, _)| *idx);

    Partial {
        value: values,
        error: MetaError::chain(errors.into_iter().map(|(_, e)| e).collect()),
    }
}
