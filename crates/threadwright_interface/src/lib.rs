//! Trait seams for threadwright.
//!
//! Every external collaborator of the pipeline sits behind one of these traits:
//! - [`TextGenerator`] - generative-text endpoint
//! - [`ImageGenerator`] - generative-image endpoint
//! - [`AssetFetcher`] - download of a generated image
//! - [`MediaUploader`] - platform media endpoint
//! - [`SocialPlatform`] - platform post endpoint
//! - [`UsedTopics`] - durable used-topic set
//!
//! Production implementations live in `threadwright_models`, `threadwright_social`
//! and `threadwright_database`; tests substitute their own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{
    AssetFetcher, ImageGenerator, MediaUploader, SocialPlatform, TextGenerator, UsedTopics,
};
