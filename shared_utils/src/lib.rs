//! Small shared helpers for the portfolio workspace.
//!
//! Currently this is the retry/backoff wrapper used by the server-side
//! catalog read. Operations are retried with exponential backoff and every
//! failure is logged with its call-site context.

use std::time::Duration;

use tokio_retry::{strategy::ExponentialBackoff, Retry};
use tracing::{error, warn};

/// Backoff parameters for a retried asynchronous operation.
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub attempts: usize,
}

impl Backoff {
    #[must_use]
    pub const fn new(initial_delay: Duration, max_delay: Duration, attempts: usize) -> Self {
        Self {
            initial_delay,
            max_delay,
            attempts,
        }
    }

    /// The delay sequence between attempts. One entry per retry, so an
    /// operation runs at most `attempts + 1` times.
    fn delays(&self) -> impl Iterator<Item = Duration> + Clone {
        ExponentialBackoff::from_millis(u64::try_from(self.initial_delay.as_millis()).unwrap_or(1))
            .max_delay(self.max_delay)
            .take(self.attempts)
    }
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(2),
            attempts: 3,
        }
    }
}

/// Run `operation` until it succeeds or the backoff is exhausted.
///
/// `context` is included in log messages to identify the call site.
pub async fn with_backoff<F, Fut, T, E>(
    context: &str,
    backoff: Backoff,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Debug,
{
    let result = Retry::spawn(backoff.delays(), || {
        let fut = operation();
        async move {
            match fut.await {
                Ok(value) => Ok(value),
                Err(err) => {
                    warn!(error = ?err, retry_context = context, "operation failed; retrying");
                    Err(err)
                }
            }
        }
    })
    .await;

    if let Err(err) = &result {
        error!(
            error = ?err,
            retry_context = context,
            "operation failed after exhausting retries"
        );
    }

    result
}
