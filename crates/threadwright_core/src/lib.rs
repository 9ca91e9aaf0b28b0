//! Core data types for threadwright.
//!
//! This crate provides the plain data types shared by every threadwright crate:
//! topics, generated thread units, media handles, and post identifiers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod post;
mod request;
mod thread;
mod topic;

pub use media::{ImageUrl, MediaHandle};
pub use post::{PostId, PostRequest, PublishedUnit};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, CompletionRequestBuilderError, ImageRequest,
    ImageRequestBuilder, ImageRequestBuilderError,
};
pub use thread::{Thread, ThreadUnit};
pub use topic::Topic;
