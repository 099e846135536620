//! Compensation for multi-step writes.
//!
//! Forward steps run inline in the caller. Each completed step may register an
//! undo; on failure the undos run in reverse registration order on a detached
//! task, so cancelling the caller cannot interrupt a rollback that has begun.

use std::future::Future;

use futures::future::BoxFuture;
use tracing::{error, info};

use crate::error::MetaError;

type Undo = (String, BoxFuture<'static, Result<(), MetaError>>);

pub struct Saga {
    api: &'static str,
    undo: Vec<Undo>,
}

impl Saga {
    pub fn new(api: &'static str) -> Self {
        Self {
            api,
            undo: Vec::new(),
        }
    }

    /// Register the compensation for a step that just completed. The future is
    /// not polled unless the saga is rolled back.
    pub fn on_rollback<F>(&mut self, label: impl Into<String>, undo: F)
    where
        F: Future<Output = Result<(), MetaError>> + Send + 'static,
    {
        self.undo.push((label.into(), Box::pin(undo)));
    }

    /// Run every registered compensation and return `cause` with any
    /// compensation failures appended.
    pub async fn rollback(self, cause: MetaError) -> MetaError {
        let api = self.api;
        let undo = self.undo;

        let task = tokio::spawn(async move {
            let mut failures = Vec::new();
            for (label, step) in undo.into_iter().rev() {
                match step.await {
                    Ok(()) => info!(api, step = %label, "compensation applied"),
                    Err(e) => {
                        error!(api, step = %label, error = %e, "compensation failed");
                        failures.push(e);
                    }
                }
            }
            failures
        });

        let failures = match task.await {
            Ok(failures) => failures,
            Err(e) => vec![MetaError::Internal(format!("{api} compensation task failed: {e}"))],
        };

        failures.into_iter().fold(cause, MetaError::append)
    }
}
