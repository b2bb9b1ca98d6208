use crate::utils::error::{PortfolioError, Result};
use backon::{ExponentialBuilder, Retryable};
use std::future::Future;
use std::time::Duration;

/// Capped exponential backoff: the delay doubles after every failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: usize, initial_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_delay,
            ..Self::default()
        }
    }

    /// Single attempt, no retries.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.initial_delay)
            .with_max_delay(self.max_delay)
            .with_factor(2.0)
            .with_max_times(self.max_attempts.saturating_sub(1))
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or the
/// policy runs out of attempts. The last error is returned unchanged.
pub async fn retry_with_backoff<F, Fut, T>(policy: &RetryPolicy, label: &str, operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    operation
        .retry(policy.backoff())
        .sleep(tokio::time::sleep)
        .when(|err: &PortfolioError| err.is_retryable())
        .notify(|err: &PortfolioError, delay: Duration| {
            tracing::warn!("{} failed ({}), retrying in {:?}", label, err, delay);
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fast_policy(attempts: usize) -> RetryPolicy {
        RetryPolicy::new(attempts, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_retries_transient_failures_until_success() {
        let calls = AtomicUsize::new(0);

        let result = retry_with_backoff(&fast_policy(3), "projects", || async {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                Err(PortfolioError::network())
            } else {
                Ok(n)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let calls = AtomicUsize::new(0);

        let result: Result<()> = retry_with_backoff(&fast_policy(3), "projects", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(PortfolioError::RemoteError {
                status: 502,
                message: "Bad gateway".to_string(),
            })
        })
        .await;

        assert!(matches!(result, Err(PortfolioError::RemoteError { status: 502, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_does_not_retry_permanent_errors() {
        let calls = AtomicUsize::new(0);

        let result: Result<()> = retry_with_backoff(&fast_policy(3), "project", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(PortfolioError::NotFound { id: "42".to_string() })
        })
        .await;

        assert!(matches!(result, Err(PortfolioError::NotFound { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_policy_never_drops_below_one_attempt() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
        assert_eq!(RetryPolicy::none().max_attempts, 1);
    }
}
