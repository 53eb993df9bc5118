use std::future::Future;
use std::time::Duration;

use log::warn;
use uigen_core::service::ServiceError;

/// Retry behaviour for rate-limited exchanges.
///
/// Only [`ServiceError::RateLimited`] is retried, after a fixed cooldown, at most
/// `max_retries` times. Every other error is returned immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub cooldown: Duration,
    pub max_retries: u32,
}

impl RetryPolicy {
    /// Retry a single time after `cooldown`.
    pub const fn once_after(cooldown: Duration) -> Self {
        Self {
            cooldown,
            max_retries: 1,
        }
    }

    /// Run `operation`, retrying it from scratch while it reports rate limiting.
    pub async fn run<T, F, Fut>(&self, context: &str, mut operation: F) -> Result<T, ServiceError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ServiceError>>,
    {
        let mut retries = 0;

        loop {
            match operation().await {
                Err(err) if err.is_rate_limited() && retries < self.max_retries => {
                    retries += 1;
                    warn!(
                        "{}: rate limited, retrying in {:?} ({}/{})",
                        context, self.cooldown, retries, self.max_retries
                    );
                    tokio::time::sleep(self.cooldown).await;
                }
                Err(err) if err.is_rate_limited() => {
                    warn!("{}: still rate limited after {} retries", context, retries);
                    return Err(err);
                }
                other => return other,
            }
        }
    }
}
