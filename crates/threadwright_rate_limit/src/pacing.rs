//! Pacing between successive posts.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Fixed inter-post delay plus the bounded wait used after a 429.
///
/// This is a heuristic: it keeps a short burst of posts under the platform's
/// limits without tracking a token bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Pacing {
    /// Delay after each successful post, in milliseconds
    delay_ms: u64,
    /// Times the same post is retried after a 429
    rate_limit_retries: u32,
    /// Wait used when a 429 carries no reset hint, in milliseconds
    default_rate_limit_wait_ms: u64,
    /// Upper bound on any single rate-limit wait, in milliseconds
    max_rate_limit_wait_ms: u64,
}

impl Pacing {
    /// Pacing with the given post delay and default 429 handling.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_ms: millis(delay),
            ..Self::default()
        }
    }

    /// Override 429 handling.
    pub fn with_rate_limit(
        mut self,
        retries: u32,
        default_wait: Duration,
        max_wait: Duration,
    ) -> Self {
        self.rate_limit_retries = retries;
        self.default_rate_limit_wait_ms = millis(default_wait);
        self.max_rate_limit_wait_ms = millis(max_wait);
        self
    }

    /// Delay after each successful post.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// How long to wait after a 429 that asked for `retry_after_secs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use threadwright_rate_limit::Pacing;
    ///
    /// let pacing = Pacing::new(Duration::from_secs(3))
    ///     .with_rate_limit(2, Duration::from_secs(60), Duration::from_secs(300));
    /// assert_eq!(pacing.rate_limit_wait(Some(20)), Duration::from_secs(20));
    /// assert_eq!(pacing.rate_limit_wait(Some(9000)), Duration::from_secs(300));
    /// assert_eq!(pacing.rate_limit_wait(None), Duration::from_secs(60));
    /// ```
    pub fn rate_limit_wait(&self, retry_after_secs: Option<u64>) -> Duration {
        let wait = retry_after_secs
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_millis(self.default_rate_limit_wait_ms));
        wait.min(Duration::from_millis(self.max_rate_limit_wait_ms))
    }

    /// Sleep for the post delay.
    pub async fn pause(&self) {
        let delay = self.delay();
        if delay.is_zero() {
            return;
        }
        debug!(delay_ms = self.delay_ms, "Pacing before next post");
        tokio::time::sleep(delay).await;
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            delay_ms: 3_000,
            rate_limit_retries: 2,
            default_rate_limit_wait_ms: 60_000,
            max_rate_limit_wait_ms: 900_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_pause_sleeps_for_delay() {
        let pacing = Pacing::new(Duration::from_secs(3));
        let started = tokio::time::Instant::now();
        pacing.pause().await;
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[test]
    fn test_sub_second_waits_are_kept() {
        let pacing = Pacing::new(Duration::from_millis(250)).with_rate_limit(
            1,
            Duration::from_millis(1_500),
            Duration::from_millis(2_500),
        );
        assert_eq!(pacing.delay(), Duration::from_millis(250));
        assert_eq!(pacing.rate_limit_wait(None), Duration::from_millis(1_500));
        assert_eq!(
            pacing.rate_limit_wait(Some(5)),
            Duration::from_millis(2_500)
        );
        assert_eq!(pacing.rate_limit_wait(Some(2)), Duration::from_secs(2));
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(1_500)), 1_500);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_does_not_sleep() {
        let pacing = Pacing::new(Duration::ZERO);
        let started = tokio::time::Instant::now();
        pacing.pause().await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
