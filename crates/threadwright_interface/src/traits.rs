//! Trait definitions for the pipeline's collaborators.

use async_trait::async_trait;
use std::path::Path;
use threadwright_core::{
    CompletionRequest, ImageRequest, ImageUrl, MediaHandle, PostId, PostRequest, Topic,
};
use threadwright_error::ThreadwrightResult;

/// Generative-text backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one completion and return the raw response text.
    async fn complete(&self, req: &CompletionRequest) -> ThreadwrightResult<String>;

    /// Provider name (e.g., "xai").
    fn provider_name(&self) -> &'static str;
}

/// Generative-image backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image and return where it can be downloaded.
    async fn generate_image(&self, req: &ImageRequest) -> ThreadwrightResult<ImageUrl>;
}

/// Downloads remote assets.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// Implementations bound the request with a timeout and treat
    /// non-success statuses as errors.
    async fn fetch(&self, url: &ImageUrl) -> ThreadwrightResult<Vec<u8>>;
}

/// Platform media endpoint.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload the file at `path` and return the platform's handle for it.
    async fn upload_media(&self, path: &Path) -> ThreadwrightResult<MediaHandle>;
}

/// Platform post endpoint.
#[async_trait]
pub trait SocialPlatform: Send + Sync {
    /// Create one post.
    ///
    /// # Errors
    ///
    /// Returns a social error carrying `RateLimited` for HTTP 429 so callers
    /// can wait and retry.
    async fn post(&self, req: &PostRequest) -> ThreadwrightResult<PostId>;

    /// Platform name (e.g., "x").
    fn platform_name(&self) -> &str;
}

/// Durable set of topics that have already been used.
pub trait UsedTopics {
    /// Whether `topic` has been recorded.
    fn contains(&self, topic: &Topic) -> bool;

    /// Record `topic` as used at `now` (epoch seconds).
    ///
    /// Recording an already-present topic is a no-op.
    fn mark_used(&mut self, topic: &Topic, now: i64) -> ThreadwrightResult<()>;
}
