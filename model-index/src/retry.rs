//! Retry executor.
//!
//! Runs an index operation, retrying failures with a linear backoff. Error
//! kinds on the policy's except-list are returned on first occurrence.

use std::future::Future;
use std::num::NonZeroU32;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::errors::{ErrorKind, ModelIndexError};

const DEFAULT_TIMES: NonZeroU32 = NonZeroU32::MIN.saturating_add(2);

/// How many times an operation may fail before its error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempts {
    Limited(NonZeroU32),
    /// Retry forever, without pausing.
    Unlimited,
}

/// Retry settings for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub times: Attempts,
    /// Pause after the n-th failure is `n * delay_multiplier`, saturating at `Duration::MAX`.
    pub delay_multiplier: Duration,
    /// Error kinds returned immediately instead of retried.
    pub except: Vec<ErrorKind>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            times: Attempts::Limited(DEFAULT_TIMES),
            delay_multiplier: Duration::ZERO,
            except: Vec::new(),
        }
    }
}

impl RetryPolicy {
    /// Limit the number of failed attempts. Zero is treated as one.
    pub fn with_times(mut self, times: u32) -> Self {
        self.times = Attempts::Limited(NonZeroU32::new(times).unwrap_or(NonZeroU32::MIN));
        self
    }

    /// Retry until the operation succeeds.
    pub fn unlimited(mut self) -> Self {
        self.times = Attempts::Unlimited;
        self
    }

    pub fn with_delay_multiplier(mut self, delay_multiplier: Duration) -> Self {
        self.delay_multiplier = delay_multiplier;
        self
    }

    /// Never retry errors of this kind.
    pub fn except(mut self, kind: ErrorKind) -> Self {
        self.except.push(kind);
        self
    }

    pub fn is_excepted(&self, kind: ErrorKind) -> bool {
        self.except.contains(&kind)
    }
}

/// Run `operation` until it succeeds or the policy gives up.
///
/// After the n-th failure the executor pauses for `n * delay_multiplier`
/// and retries while `n` is below the attempt limit; once the limit is
/// reached the last error is returned. An operation failing `k` times
/// against a limit of `n` therefore runs `k + 1` times when `k < n` and `n`
/// times otherwise. Unlimited policies retry immediately and never give up.
pub async fn run_with_retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, ModelIndexError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<ModelIndexError>,
{
    let mut count: u32 = 0;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if count > 0 {
                    info!(attempts = count + 1, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) => error.into(),
        };

        let kind = error.kind();
        if policy.is_excepted(kind) {
            debug!(?kind, error = %error, "Non-retryable error encountered");
            return Err(error);
        }

        let limit = match policy.times {
            Attempts::Unlimited => {
                warn!(error = %error, "Operation failed, retrying");
                continue;
            }
            Attempts::Limited(limit) => limit.get(),
        };

        count += 1;
        let delay = policy
            .delay_multiplier
            .checked_mul(count)
            .unwrap_or(Duration::MAX);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if count >= limit {
            warn!(attempts = count, error = %error, "Operation failed, giving up");
            return Err(error);
        }

        warn!(
            attempt = count,
            max_attempts = limit,
            ?delay,
            error = %error,
            "Operation failed, retrying"
        );
    }
}
