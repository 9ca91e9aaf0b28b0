//! Illustration generation with bounded retry.

use crate::ImageSettings;
use std::sync::Arc;
use threadwright_core::{ImageRequest, ImageUrl, Topic};
use threadwright_interface::ImageGenerator;
use tracing::{error, info, instrument, warn};

/// Asks the image backend for one illustration of a topic.
#[derive(Clone)]
pub struct IllustrationGenerator {
    images: Arc<dyn ImageGenerator>,
    settings: ImageSettings,
}

impl std::fmt::Debug for IllustrationGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IllustrationGenerator")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl IllustrationGenerator {
    /// Generator over `images` with the given settings.
    pub fn new(images: Arc<dyn ImageGenerator>, settings: ImageSettings) -> Self {
        Self { images, settings }
    }

    /// The prompt sent for `topic`.
    pub fn prompt(&self, topic: &Topic) -> String {
        self.settings
            .prompt_template
            .replace("{topic}", topic.as_str())
    }

    /// Generate an illustration URL for `topic`.
    ///
    /// Makes at most `retry.max_retries + 1` calls. Exhausting the retries,
    /// or image generation being disabled, yields `None`.
    #[instrument(skip(self), fields(topic = %topic, model = %self.settings.model))]
    pub async fn generate(&self, topic: &Topic) -> Option<ImageUrl> {
        if !self.settings.enabled {
            info!("Image generation disabled");
            return None;
        }

        let request = match ImageRequest::builder()
            .model(self.settings.model.as_str())
            .prompt(self.prompt(topic))
            .size(self.settings.size.clone())
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "Failed to build image request");
                return None;
            }
        };

        let images = &self.images;
        let request = &request;
        match self
            .settings
            .retry
            .run("image generation", |_attempt| images.generate_image(request))
            .await
        {
            Ok(url) => {
                info!(url = %url, "Generated illustration");
                Some(url)
            }
            Err(e) => {
                warn!(error = %e, "Skipping image after retries");
                None
            }
        }
    }
}
