//! `topics` command handler.

use threadwright_bot::{AppConfig, TopicSelector};
use threadwright_database::SqliteTopicStore;
use threadwright_error::ThreadwrightResult;

/// Print every pool topic with its status, then the fallback.
pub fn list_topics(config: &AppConfig) -> ThreadwrightResult<u8> {
    let store = SqliteTopicStore::open(&config.database.path)?;
    let selector = TopicSelector::from_settings(store, &config.topics);

    let statuses = selector.statuses();
    let used = statuses.iter().filter(|(_, used)| *used).count();
    for (topic, is_used) in &statuses {
        let marker = if *is_used { "used" } else { "available" };
        println!("[{:>9}] {}", marker, topic);
    }
    println!(
        "\n{} of {} used. Fallback: {}",
        used,
        statuses.len(),
        selector.fallback()
    );
    Ok(0)
}
