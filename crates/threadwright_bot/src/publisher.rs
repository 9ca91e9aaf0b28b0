//! Reply-chain posting.

use std::sync::Arc;
use threadwright_core::{MediaHandle, PostId, PostRequest, PublishedUnit, Thread};
use threadwright_error::ThreadwrightResult;
use threadwright_interface::SocialPlatform;
use threadwright_rate_limit::Pacing;
use tracing::{error, info, instrument, warn};

/// Result of publishing one thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Every unit was posted.
    Complete {
        /// Posted units in order
        units: Vec<PublishedUnit>,
    },
    /// Posting stopped at `failed_index`; earlier units stay posted.
    Aborted {
        /// Index of the unit that could not be posted
        failed_index: usize,
        /// Units posted before the failure
        posted: Vec<PublishedUnit>,
        /// Why the unit failed
        reason: String,
    },
}

impl PublishOutcome {
    /// Units that made it onto the platform.
    pub fn posted(&self) -> &[PublishedUnit] {
        match self {
            PublishOutcome::Complete { units } => units,
            PublishOutcome::Aborted { posted, .. } => posted,
        }
    }
}

/// Posts a thread as a reply chain.
///
/// Unit 0 carries the media and has no parent; unit `i` replies to unit
/// `i - 1`. A pacing delay follows every post but the last.
#[derive(Clone)]
pub struct Publisher {
    platform: Arc<dyn SocialPlatform>,
    pacing: Pacing,
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("platform", &self.platform.platform_name())
            .field("pacing", &self.pacing)
            .finish()
    }
}

impl Publisher {
    /// Publisher for `platform`.
    pub fn new(platform: Arc<dyn SocialPlatform>, pacing: Pacing) -> Self {
        Self { platform, pacing }
    }

    /// Post every unit of `thread`, stopping at the first failure.
    #[instrument(
        skip(self, thread),
        fields(units = thread.len(), has_media = media.is_some())
    )]
    pub async fn publish(&self, thread: &Thread, media: Option<MediaHandle>) -> PublishOutcome {
        let total = thread.len();
        let mut posted: Vec<PublishedUnit> = Vec::with_capacity(total);
        let mut media = media;

        for (index, unit) in thread.units().iter().enumerate() {
            let parent = posted.last().map(|p| p.id().clone());
            let mut request = PostRequest::new(unit.as_str()).with_media(media.take());
            if let Some(parent) = parent.clone() {
                request = request.in_reply_to(parent);
            }

            match self.post_with_rate_limit(&request).await {
                Ok(id) => {
                    info!(index, total, id = %id, "Posted unit");
                    posted.push(PublishedUnit::new(unit.as_str(), id, parent));
                }
                Err(e) => {
                    error!(index, error = %e, "Posting failed, aborting thread");
                    return PublishOutcome::Aborted {
                        failed_index: index,
                        posted,
                        reason: e.to_string(),
                    };
                }
            }

            if index + 1 < total {
                self.pacing.pause().await;
            }
        }

        PublishOutcome::Complete { units: posted }
    }

    /// Post one unit, waiting out up to `rate_limit_retries` 429 responses.
    async fn post_with_rate_limit(&self, request: &PostRequest) -> ThreadwrightResult<PostId> {
        let mut waits = 0u32;
        loop {
            match self.platform.post(request).await {
                Err(e) => match e.rate_limit() {
                    Some(retry_after) if waits < *self.pacing.rate_limit_retries() => {
                        waits += 1;
                        let wait = self.pacing.rate_limit_wait(retry_after);
                        warn!(
                            wait = ?wait,
                            attempt = waits,
                            "Rate limited, waiting before retrying the same post"
                        );
                        tokio::time::sleep(wait).await;
                    }
                    _ => return Err(e),
                },
                ok => return ok,
            }
        }
    }
}
