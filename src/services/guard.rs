// src/services/guard.rs

//! Deadline and lifetime scoping for backend reads.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::api::Endpoint;
use crate::error::{AppError, Result};

/// Bounds every read with a deadline and ties it to its owner's lifetime.
///
/// Clones share the same cancellation token.
#[derive(Debug, Clone)]
pub struct ReadGuard {
    deadline: Duration,
    token: CancellationToken,
}

impl ReadGuard {
    pub fn new(deadline: Duration) -> Self {
        Self {
            deadline,
            token: CancellationToken::new(),
        }
    }

    /// Abandon all current and future reads.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `read` until it settles, the deadline passes, or the guard is
    /// cancelled.
    pub async fn run<T, F>(&self, endpoint: Endpoint, read: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(AppError::Cancelled(endpoint)),
            settled = tokio::time::timeout(self.deadline, read) => match settled {
                Ok(result) => result,
                Err(_) => Err(AppError::Timeout {
                    endpoint,
                    after: self.deadline,
                }),
            },
        }
    }
}
