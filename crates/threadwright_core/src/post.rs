//! Post identifiers and requests.

use crate::MediaHandle;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Platform-assigned post identifier.
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
pub struct PostId(pub String);

/// A single post to create.
///
/// # Examples
///
/// ```
/// use threadwright_core::{MediaHandle, PostId, PostRequest};
///
/// let head = PostRequest::new("hook").with_media(Some(MediaHandle("9".to_string())));
/// assert!(head.reply_to().is_none());
///
/// let reply = PostRequest::new("second").in_reply_to(PostId("100".to_string()));
/// assert_eq!(reply.reply_to().as_ref().map(|id| id.0.as_str()), Some("100"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PostRequest {
    /// Post body
    text: String,
    /// Attached media, if any
    media: Option<MediaHandle>,
    /// Post this one replies to, if any
    reply_to: Option<PostId>,
}

impl PostRequest {
    /// Create a standalone post with no media.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media: None,
            reply_to: None,
        }
    }

    /// Attach (or clear) a media handle.
    pub fn with_media(mut self, media: Option<MediaHandle>) -> Self {
        self.media = media;
        self
    }

    /// Make this post a reply to `parent`.
    pub fn in_reply_to(mut self, parent: PostId) -> Self {
        self.reply_to = Some(parent);
        self
    }
}

/// A post that the platform accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PublishedUnit {
    /// Post body
    text: String,
    /// Identifier assigned by the platform
    id: PostId,
    /// Identifier of the post this one replies to
    parent: Option<PostId>,
}

impl PublishedUnit {
    /// Record an accepted post.
    pub fn new(text: impl Into<String>, id: PostId, parent: Option<PostId>) -> Self {
        Self {
            text: text.into(),
            id,
            parent,
        }
    }
}
