//! Topic selection.

use crate::TopicSettings;
use rand::Rng;
use rand::seq::SliceRandom;
use threadwright_core::Topic;
use threadwright_error::ThreadwrightResult;
use threadwright_interface::UsedTopics;
use tracing::{debug, info, instrument};

/// Picks an unused topic from the pool and records it.
#[derive(Debug)]
pub struct TopicSelector<S> {
    store: S,
    pool: Vec<Topic>,
    fallback: Topic,
}

impl<S: UsedTopics> TopicSelector<S> {
    /// Selector over `pool`, falling back to `fallback` once every entry is used.
    pub fn new(store: S, pool: Vec<Topic>, fallback: Topic) -> Self {
        Self {
            store,
            pool,
            fallback,
        }
    }

    /// Selector over the configured pool and fallback.
    pub fn from_settings(store: S, settings: &TopicSettings) -> Self {
        let pool = settings.pool.iter().map(|t| Topic::from(t.as_str()));
        Self::new(
            store,
            pool.collect(),
            Topic::from(settings.fallback.as_str()),
        )
    }

    /// Pool entries not yet recorded, in pool order.
    pub fn available(&self) -> Vec<&Topic> {
        self.pool
            .iter()
            .filter(|topic| !self.store.contains(topic))
            .collect()
    }

    /// Every pool entry paired with whether it has been used.
    pub fn statuses(&self) -> Vec<(&Topic, bool)> {
        self.pool
            .iter()
            .map(|topic| (topic, self.store.contains(topic)))
            .collect()
    }

    /// The topic used once the pool is exhausted.
    pub fn fallback(&self) -> &Topic {
        &self.fallback
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Pick and record a topic using the thread-local RNG and current time.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the pick cannot be recorded.
    pub fn pick(&mut self) -> ThreadwrightResult<Topic> {
        let now = chrono::Utc::now().timestamp();
        self.pick_with(&mut rand::thread_rng(), now)
    }

    /// Pick uniformly among unused entries and record the pick at `now`.
    ///
    /// When nothing is available the fallback is returned and NOT recorded.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the pick cannot be recorded.
    #[instrument(skip(self, rng))]
    pub fn pick_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: i64,
    ) -> ThreadwrightResult<Topic> {
        let Some(topic) = self.choose(rng) else {
            info!(fallback = %self.fallback, "Topic pool exhausted, using fallback");
            return Ok(self.fallback.clone());
        };

        self.store.mark_used(&topic, now)?;
        info!(topic = %topic, "Selected topic");
        Ok(topic)
    }

    /// The topic [`pick`](Self::pick) would choose, without recording it.
    pub fn peek(&self) -> Topic {
        self.peek_with(&mut rand::thread_rng())
    }

    /// [`peek`](Self::peek) with an explicit RNG.
    pub fn peek_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Topic {
        self.choose(rng).unwrap_or_else(|| self.fallback.clone())
    }

    fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Topic> {
        let available = self.available();
        debug!(
            available = available.len(),
            pool = self.pool.len(),
            "Choosing topic"
        );
        available.choose(rng).map(|topic| (*topic).clone())
    }
}
