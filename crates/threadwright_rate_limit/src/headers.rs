//! Rate-limit hints from platform response headers.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use tracing::debug;

/// Epoch second at which the current rate-limit window resets.
const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

/// Seconds to wait before retrying, read from a 429 response.
///
/// Prefers `x-rate-limit-reset` (epoch seconds) and falls back to the
/// standard `retry-after` header (delta seconds). A reset time already in the
/// past yields `Some(0)`.
///
/// # Examples
///
/// ```
/// use reqwest::header::{HeaderMap, HeaderValue};
/// use threadwright_rate_limit::retry_after_secs;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-rate-limit-reset", HeaderValue::from_static("1700000090"));
/// assert_eq!(retry_after_secs(&headers, 1_700_000_000), Some(90));
/// ```
pub fn retry_after_secs(headers: &HeaderMap, now_epoch_secs: u64) -> Option<u64> {
    if let Some(reset) = parse_header_u64(headers, RATE_LIMIT_RESET) {
        let wait = reset.saturating_sub(now_epoch_secs);
        debug!(reset, wait, "Rate limit reset from x-rate-limit-reset");
        return Some(wait);
    }

    let wait = parse_header_u64(headers, RETRY_AFTER.as_str())?;
    debug!(wait, "Rate limit reset from retry-after");
    Some(wait)
}

/// Helper to parse u64 from header value.
fn parse_header_u64(headers: &HeaderMap, key: &str) -> Option<u64> {
    headers.get(key)?.to_str().ok()?.trim().parse().ok()
}
