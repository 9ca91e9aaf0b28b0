//! Row types for the `used_topics` table.

use diesel::prelude::*;

/// A topic recorded as used.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::schema::used_topics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UsedTopicRow {
    pub topic: String,
    pub date: i64,
}

/// Insertable struct for used_topics table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::used_topics)]
pub struct NewUsedTopic<'a> {
    pub topic: &'a str,
    pub date: i64,
}
