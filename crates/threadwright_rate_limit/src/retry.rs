//! Bounded retry with configurable backoff.

use crate::pacing::millis;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::strategy::{FixedInterval, jitter};
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, warn};

/// Delay schedule between attempts.
///
/// ```toml
/// backoff = { kind = "fixed", delay_ms = 2000 }
/// backoff = { kind = "exponential", initial_ms = 500, max_delay_ms = 8000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Backoff {
    /// Same delay before every retry.
    Fixed {
        /// Delay in milliseconds
        delay_ms: u64,
    },
    /// Doubling delay, capped.
    Exponential {
        /// First delay in milliseconds
        initial_ms: u64,
        /// Upper bound on any single delay in milliseconds
        max_delay_ms: u64,
    },
}

/// How many times to retry a failing call and how long to wait in between.
///
/// `max_retries` counts retries after the first attempt, so an operation
/// that always fails is called `max_retries + 1` times and the policy sleeps
/// `max_retries` times.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use threadwright_rate_limit::RetryPolicy;
///
/// let policy = RetryPolicy::fixed(2, Duration::from_secs(2));
/// let delays: Vec<Duration> = policy.delays().collect();
/// assert_eq!(delays, vec![Duration::from_secs(2); 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    max_retries: usize,
    /// Delay schedule
    backoff: Backoff,
    /// Randomise each delay
    #[serde(default)]
    jitter: bool,
}

impl RetryPolicy {
    /// Retry `max_retries` times with the same `delay` between attempts.
    pub fn fixed(max_retries: usize, delay: Duration) -> Self {
        Self {
            max_retries,
            backoff: Backoff::Fixed {
                delay_ms: millis(delay),
            },
            jitter: false,
        }
    }

    /// Retry `max_retries` times with a doubling delay capped at `max_delay`.
    pub fn exponential(max_retries: usize, initial: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            backoff: Backoff::Exponential {
                initial_ms: millis(initial),
                max_delay_ms: millis(max_delay),
            },
            jitter: false,
        }
    }

    /// A single attempt, no retries.
    pub fn none() -> Self {
        Self::fixed(0, Duration::ZERO)
    }

    /// Enable or disable jitter.
    pub fn with_jitter(mut self, enabled: bool) -> Self {
        self.jitter = enabled;
        self
    }

    /// The delays slept before each retry, in order.
    pub fn delays(&self) -> Box<dyn Iterator<Item = Duration> + Send> {
        let base: Box<dyn Iterator<Item = Duration> + Send> = match self.backoff {
            Backoff::Fixed { delay_ms } => Box::new(FixedInterval::from_millis(delay_ms)),
            Backoff::Exponential {
                initial_ms,
                max_delay_ms,
            } => {
                let cap = Duration::from_millis(max_delay_ms);
                let first = Duration::from_millis(initial_ms).min(cap);
                Box::new(std::iter::successors(Some(first), move |prev| {
                    Some(prev.saturating_mul(2).min(cap))
                }))
            }
        };

        if self.jitter {
            Box::new(base.map(jitter).take(self.max_retries))
        } else {
            Box::new(base.take(self.max_retries))
        }
    }

    /// Run `op` until it succeeds or the retries are used up.
    ///
    /// Every error is treated as transient. `op` receives the 1-based attempt
    /// number. The last error is returned once the policy is exhausted.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let max_attempts = self.max_retries + 1;
        let mut attempt = 0usize;

        Retry::spawn(self.delays(), || {
            attempt += 1;
            let current = attempt;
            let call = op(current);
            async move {
                match call.await {
                    Ok(value) => {
                        debug!(label, attempt = current, "Attempt succeeded");
                        Ok(value)
                    }
                    Err(err) => {
                        warn!(
                            label,
                            attempt = current,
                            max_attempts,
                            error = %err,
                            "Attempt failed"
                        );
                        Err(RetryError::Transient {
                            err,
                            retry_after: None,
                        })
                    }
                }
            }
        })
        .await
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(1, Duration::from_secs(2))
    }
}
