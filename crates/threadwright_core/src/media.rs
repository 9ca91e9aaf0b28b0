//! Media reference types.

use serde::{Deserialize, Serialize};

/// Remote location of a generated image.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct ImageUrl(pub String);

impl ImageUrl {
    /// Borrow the URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque identifier the platform returns for an uploaded asset.
///
/// # Examples
///
/// ```
/// use threadwright_core::MediaHandle;
///
/// let handle = MediaHandle("1880028106020515840".to_string());
/// assert_eq!(handle.to_string(), "1880028106020515840");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct MediaHandle(pub String);
