//! Retry and pacing for threadwright.
//!
//! - [`RetryPolicy`] - bounded retry with an injectable backoff strategy
//! - [`Pacing`] - fixed delay between successive posts plus bounded waits
//!   when the platform answers 429
//! - [`retry_after_secs`] - reads the platform's rate-limit reset headers

mod headers;
mod pacing;
mod retry;

pub use headers::retry_after_secs;
pub use pacing::Pacing;
pub use retry::{Backoff, RetryPolicy};
