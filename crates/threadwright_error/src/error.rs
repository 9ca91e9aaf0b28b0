//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
use crate::{ConfigError, HttpError, ModelsError, SocialError, StorageError};

/// Every error condition a run can surface.
///
/// # Examples
///
/// ```
/// use threadwright_error::{ThreadwrightError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ThreadwrightError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ThreadwrightErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration or credentials error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Local file error
    #[from(StorageError)]
    Storage(StorageError),
    /// Topic store error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Text or image generation error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Social platform error
    #[from(SocialError)]
    Social(SocialError),
}

/// Threadwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use threadwright_error::{ThreadwrightResult, ConfigError};
///
/// fn might_fail() -> ThreadwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Threadwright Error: {}", _0)]
pub struct ThreadwrightError(Box<ThreadwrightErrorKind>);

impl ThreadwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: ThreadwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ThreadwrightErrorKind {
        &self.0
    }

    /// Whether a retry of the failed call could succeed.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            ThreadwrightErrorKind::Http(_) => true,
            ThreadwrightErrorKind::Models(e) => e.kind.is_retryable(),
            ThreadwrightErrorKind::Social(e) => e.kind.is_retryable(),
            _ => false,
        }
    }

    /// The platform rate-limit error, if this is one.
    ///
    /// Returns `Some(retry_after_secs)` for HTTP 429 responses from the
    /// social platform; the inner value is `None` when no reset hint was sent.
    pub fn rate_limit(&self) -> Option<Option<u64>> {
        match self.kind() {
            ThreadwrightErrorKind::Social(e) if e.kind.is_rate_limited() => {
                Some(e.kind.retry_after_secs())
            }
            _ => None,
        }
    }
}

// Generic From implementation for any type that converts to ThreadwrightErrorKind
impl<T> From<T> for ThreadwrightError
where
    T: Into<ThreadwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for threadwright operations.
pub type ThreadwrightResult<T> = std::result::Result<T, ThreadwrightError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModelsErrorKind, SocialErrorKind};

    #[test]
    fn test_rate_limit_only_for_social_429() {
        let limited: ThreadwrightError = SocialError::new(SocialErrorKind::RateLimited {
            retry_after_secs: Some(12),
        })
        .into();
        assert_eq!(limited.rate_limit(), Some(Some(12)));
        assert!(limited.is_retryable());

        let other: ThreadwrightError = ModelsError::new(ModelsErrorKind::RateLimit).into();
        assert_eq!(other.rate_limit(), None);
    }

    #[test]
    fn test_config_errors_are_not_retryable() {
        let err: ThreadwrightError = ConfigError::new("XAI_API_KEY not set").into();
        assert!(!err.is_retryable());
        assert!(format!("{}", err).contains("XAI_API_KEY"));
    }
}
