//! One run of the bot, end to end.

use crate::{
    AppConfig, Credentials, IllustrationGenerator, MediaStager, PublishOutcome, Publisher,
    ThreadGenerator, TopicSelector,
};
use std::sync::Arc;
use std::time::Duration;
use threadwright_core::{PublishedUnit, Thread, Topic};
use threadwright_database::SqliteTopicStore;
use threadwright_error::ThreadwrightResult;
use threadwright_interface::UsedTopics;
use threadwright_models::XaiClient;
use threadwright_social::{HttpAssetFetcher, XClient, XEndpoints};
use tracing::{info, instrument, warn};

/// What a run achieved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The whole thread was posted.
    Published {
        /// Topic the thread was about
        topic: Topic,
        /// Posted units in order
        units: Vec<PublishedUnit>,
    },
    /// Text generation produced nothing; nothing was posted.
    NothingToPost {
        /// Topic that was selected (and stays recorded)
        topic: Topic,
    },
    /// Posting stopped part way; earlier units stay posted.
    Aborted {
        /// Topic the thread was about
        topic: Topic,
        /// Index of the unit that failed
        failed_index: usize,
        /// Units posted before the failure
        posted: Vec<PublishedUnit>,
        /// Why the unit failed
        reason: String,
    },
}

impl RunOutcome {
    /// Process exit status: 0 when fully posted, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Published { .. } => 0,
            RunOutcome::NothingToPost { .. } | RunOutcome::Aborted { .. } => 1,
        }
    }

    /// The run's topic.
    pub fn topic(&self) -> &Topic {
        match self {
            RunOutcome::Published { topic, .. }
            | RunOutcome::NothingToPost { topic }
            | RunOutcome::Aborted { topic, .. } => topic,
        }
    }
}

/// Generated thread from a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRun {
    /// Topic that would be used
    pub topic: Topic,
    /// Thread that would be posted
    pub thread: Thread,
}

/// Selector → thread → illustration → staging → publishing.
#[derive(Debug)]
pub struct Pipeline<S> {
    selector: TopicSelector<S>,
    threads: ThreadGenerator,
    illustrations: IllustrationGenerator,
    stager: MediaStager,
    publisher: Publisher,
}

impl<S: UsedTopics> Pipeline<S> {
    /// Wire explicit components.
    pub fn new(
        selector: TopicSelector<S>,
        threads: ThreadGenerator,
        illustrations: IllustrationGenerator,
        stager: MediaStager,
        publisher: Publisher,
    ) -> Self {
        Self {
            selector,
            threads,
            illustrations,
            stager,
            publisher,
        }
    }

    /// The topic selector (and through it, the store).
    pub fn selector(&self) -> &TopicSelector<S> {
        &self.selector
    }

    /// Run once.
    ///
    /// # Errors
    ///
    /// Only topic store failures are errors; they happen before any network
    /// call. Generation, staging, and posting failures are reported in the
    /// returned [`RunOutcome`].
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> ThreadwrightResult<RunOutcome> {
        let topic = self.selector.pick()?;

        let thread = self.threads.generate(&topic).await;
        if thread.is_empty() {
            warn!(topic = %topic, "No thread generated, nothing to post");
            return Ok(RunOutcome::NothingToPost { topic });
        }

        let media = match self.illustrations.generate(&topic).await {
            Some(url) => self.stager.stage(&url).await,
            None => None,
        };
        if media.is_none() {
            info!("Posting text-only thread");
        }

        let outcome = match self.publisher.publish(&thread, media).await {
            PublishOutcome::Complete { units } => {
                info!(topic = %topic, units = units.len(), "Thread posted");
                RunOutcome::Published { topic, units }
            }
            PublishOutcome::Aborted {
                failed_index,
                posted,
                reason,
            } => RunOutcome::Aborted {
                topic,
                failed_index,
                posted,
                reason,
            },
        };
        Ok(outcome)
    }

    /// Generate the thread for the next topic without recording, uploading,
    /// or posting anything.
    #[instrument(skip(self))]
    pub async fn dry_run(&self) -> DryRun {
        let topic = self.selector.peek();
        let thread = self.threads.generate(&topic).await;
        DryRun { topic, thread }
    }
}

impl Pipeline<SqliteTopicStore> {
    /// Build the production pipeline: SQLite store, xAI, and X.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or an HTTP client
    /// cannot be built.
    #[instrument(skip_all)]
    pub fn connect(config: &AppConfig, credentials: &Credentials) -> ThreadwrightResult<Self> {
        let store = SqliteTopicStore::open(&config.database.path)?;
        let selector = TopicSelector::from_settings(store, &config.topics);

        let xai = Arc::new(XaiClient::with_timeout(
            credentials.xai_api_key(),
            config.xai.base_url.as_str(),
            Duration::from_secs(config.xai.timeout_secs),
        )?);
        let x = Arc::new(XClient::with_endpoints(
            credentials.x().clone(),
            XEndpoints {
                api_base: config.x.api_base.clone(),
                upload_base: config.x.upload_base.clone(),
            },
            Duration::from_secs(config.x.timeout_secs),
        )?);
        let fetcher = Arc::new(HttpAssetFetcher::new(config.stager.timeout())?);

        Ok(Self::new(
            selector,
            ThreadGenerator::new(xai.clone(), config.text.clone()),
            IllustrationGenerator::new(xai, config.image.clone()),
            MediaStager::new(fetcher, x.clone(), config.stager.timeout())
                .with_temp_dir(config.stager.temp_dir.clone()),
            Publisher::new(x, config.publisher),
        ))
    }
}
