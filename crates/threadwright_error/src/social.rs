//! Social platform errors.

/// Social platform error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SocialErrorKind {
    /// Request could not be sent or the connection dropped
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Platform answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Platform rate limit exceeded (HTTP 429)
    #[display("Rate limited (retry after {:?}s)", retry_after_secs)]
    RateLimited {
        /// Seconds until the limit resets, when the platform said so
        retry_after_secs: Option<u64>,
    },

    /// Credentials rejected
    #[display("Authentication failed: {}", _0)]
    Unauthorized(String),

    /// Request could not be signed
    #[display("Signing error: {}", _0)]
    Signing(String),

    /// Response body did not match the expected shape
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// Media file could not be read for upload
    #[display("Media upload error: {}", _0)]
    MediaUpload(String),
}

impl SocialErrorKind {
    /// Check if this error is transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            SocialErrorKind::Http(_) | SocialErrorKind::RateLimited { .. } => true,
            SocialErrorKind::Api { status, .. } => matches!(*status, 500 | 502 | 503 | 504),
            _ => false,
        }
    }

    /// Seconds the platform asked us to wait, for rate-limit errors.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            SocialErrorKind::RateLimited { retry_after_secs } => *retry_after_secs,
            _ => None,
        }
    }

    /// True for HTTP 429 responses.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, SocialErrorKind::RateLimited { .. })
    }
}

/// Social platform error with location tracking.
///
/// # Examples
///
/// ```
/// use threadwright_error::{SocialError, SocialErrorKind};
///
/// let err = SocialError::new(SocialErrorKind::RateLimited { retry_after_secs: Some(30) });
/// assert!(err.kind.is_rate_limited());
/// assert_eq!(err.kind.retry_after_secs(), Some(30));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Social Error: {} at {}:{}", kind, file, line)]
pub struct SocialError {
    /// The specific error kind
    pub kind: SocialErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl SocialError {
    /// Create a new social error.
    #[track_caller]
    pub fn new(kind: SocialErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for social platform operations.
pub type SocialResult<T> = Result<T, SocialError>;
