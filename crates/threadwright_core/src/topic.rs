//! Topic type.

use serde::{Deserialize, Serialize};

/// A human-readable content idea.
///
/// Identity is the exact text, so two topics differing only in whitespace are
/// distinct entries in the used-topic set.
///
/// # Examples
///
/// ```
/// use threadwright_core::Topic;
///
/// let topic = Topic::from("Liquid cooling for robotaxis");
/// assert_eq!(topic.as_str(), "Liquid cooling for robotaxis");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    /// Create a topic from any string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the topic, returning its text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Topic {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
