//! Tests for the SQLite used-topic store.

use threadwright_core::Topic;
use threadwright_database::SqliteTopicStore;
use threadwright_interface::UsedTopics;

#[test]
fn test_mark_used_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("topics.db");
    let topic = Topic::from("800V EV architectures");

    {
        let mut store = SqliteTopicStore::open(&path).expect("open");
        assert!(!store.contains(&topic));
        store.mark_used(&topic, 1_700_000_000).expect("mark");
        assert!(store.contains(&topic));
    }

    let store = SqliteTopicStore::open(&path).expect("reopen");
    assert!(store.contains(&topic));
    assert_eq!(store.used().len(), 1);
}

#[test]
fn test_mark_used_twice_keeps_one_row() {
    let mut store = SqliteTopicStore::open_in_memory().expect("open");
    let topic = Topic::from("Liquid cooling in hyperscale datacenters");

    store.mark_used(&topic, 1).expect("first mark");
    store.mark_used(&topic, 2).expect("second mark");

    assert_eq!(store.row_count(&topic).expect("count"), 1);
    assert_eq!(store.used().len(), 1);
}

#[test]
fn test_in_memory_stores_are_independent() {
    let topic = Topic::from("AI chip export rules");
    let mut first = SqliteTopicStore::open_in_memory().expect("open");
    first.mark_used(&topic, 1).expect("mark");

    let second = SqliteTopicStore::open_in_memory().expect("open");
    assert!(!second.contains(&topic));
}

#[test]
fn test_open_fails_for_unwritable_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("nested").join("topics.db");
    assert!(SqliteTopicStore::open(&path).is_err());
}
