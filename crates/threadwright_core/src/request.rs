//! Request types for the generation providers.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single-prompt text completion request.
///
/// # Examples
///
/// ```
/// use threadwright_core::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .model("grok-3")
///     .prompt("Write a thread")
///     .temperature(0.9)
///     .max_tokens(2500)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "grok-3");
/// assert_eq!(*request.max_tokens(), 2500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct CompletionRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Prompt sent as a single user message
    #[builder(setter(into))]
    prompt: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum number of output tokens
    max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a new builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// An image generation request.
///
/// Always asks for a single image.
///
/// # Examples
///
/// ```
/// use threadwright_core::ImageRequest;
///
/// let request = ImageRequest::builder()
///     .model("grok-2-image")
///     .prompt("A datacenter at dusk")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.count(), 1);
/// assert!(request.size().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
pub struct ImageRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Image prompt
    #[builder(setter(into))]
    prompt: String,
    /// Number of images (fixed to one)
    #[builder(setter(skip), default = "1")]
    count: u32,
    /// Requested size, e.g. `1024x1024`
    #[builder(default)]
    size: Option<String>,
}

impl ImageRequest {
    /// Creates a new builder.
    pub fn builder() -> ImageRequestBuilder {
        ImageRequestBuilder::default()
    }
}
