//! SQLite persistence for threadwright.
//!
//! One table, `used_topics(topic, date)`, records every topic the bot has
//! already posted about. The schema is created by an embedded diesel
//! migration when the store is opened.
//!
//! # Example
//!
//! ```
//! use threadwright_core::Topic;
//! use threadwright_database::SqliteTopicStore;
//! use threadwright_interface::UsedTopics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteTopicStore::open_in_memory()?;
//! let topic = Topic::from("Solid-state batteries");
//! store.mark_used(&topic, 1_700_000_000)?;
//! assert!(store.contains(&topic));
//! # Ok(())
//! # }
//! ```

mod connection;
mod models;
mod store;

pub mod schema;

pub use connection::{establish_connection, run_migrations};
pub use models::{NewUsedTopic, UsedTopicRow};
pub use store::SqliteTopicStore;

use threadwright_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
