//! Durable used-topic set.

use crate::schema::used_topics;
use crate::{DatabaseResult, NewUsedTopic, establish_connection};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::collections::HashSet;
use std::path::Path;
use threadwright_core::Topic;
use threadwright_error::ThreadwrightResult;
use threadwright_interface::UsedTopics;
use tracing::{debug, info, instrument};

/// Used-topic set backed by one SQLite table.
///
/// The whole table is read into memory at open; writes go to both the
/// database and the in-memory set.
pub struct SqliteTopicStore {
    conn: SqliteConnection,
    used: HashSet<Topic>,
}

impl std::fmt::Debug for SqliteTopicStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteTopicStore")
            .field("used", &self.used.len())
            .finish_non_exhaustive()
    }
}

impl SqliteTopicStore {
    /// Open (or create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns a database error if the file cannot be opened, migrated, or read.
    #[instrument(skip_all)]
    pub fn open(path: impl AsRef<Path>) -> DatabaseResult<Self> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let store = Self::from_connection(establish_connection(&path)?)?;
        info!(path = %path, used = store.used.len(), "Opened topic store");
        Ok(store)
    }

    /// Open a private in-memory store.
    pub fn open_in_memory() -> DatabaseResult<Self> {
        Self::from_connection(establish_connection(":memory:")?)
    }

    fn from_connection(mut conn: SqliteConnection) -> DatabaseResult<Self> {
        let rows: Vec<String> = used_topics::table
            .select(used_topics::topic)
            .load(&mut conn)?;
        let used = rows.into_iter().map(Topic::from).collect();
        Ok(Self { conn, used })
    }

    /// Every topic recorded so far.
    pub fn used(&self) -> &HashSet<Topic> {
        &self.used
    }

    /// Number of rows stored for `topic`.
    pub fn row_count(&mut self, topic: &Topic) -> DatabaseResult<i64> {
        let count = used_topics::table
            .filter(used_topics::topic.eq(topic.as_str()))
            .count()
            .get_result(&mut self.conn)?;
        Ok(count)
    }

    fn insert(&mut self, topic: &Topic, now: i64) -> DatabaseResult<usize> {
        let row = NewUsedTopic {
            topic: topic.as_str(),
            date: now,
        };
        let inserted = diesel::insert_or_ignore_into(used_topics::table)
            .values(&row)
            .execute(&mut self.conn)?;
        Ok(inserted)
    }
}

impl UsedTopics for SqliteTopicStore {
    fn contains(&self, topic: &Topic) -> bool {
        self.used.contains(topic)
    }

    #[instrument(skip(self), fields(topic = %topic))]
    fn mark_used(&mut self, topic: &Topic, now: i64) -> ThreadwrightResult<()> {
        let inserted = self.insert(topic, now)?;
        if inserted == 0 {
            debug!("Topic already recorded");
        }
        self.used.insert(topic.clone());
        Ok(())
    }
}
