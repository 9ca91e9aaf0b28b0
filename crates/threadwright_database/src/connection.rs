//! SQLite connection and migration utilities.

use crate::DatabaseResult;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use threadwright_error::{DatabaseError, DatabaseErrorKind};
use tracing::debug;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open the SQLite database at `path` and bring its schema up to date.
///
/// The file is created if it does not exist. `":memory:"` opens a private
/// in-memory database.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a migration fails.
pub fn establish_connection(path: &str) -> DatabaseResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(path)?;
    run_migrations(&mut conn)?;
    Ok(conn)
}

/// Run pending migrations.
pub fn run_migrations(conn: &mut SqliteConnection) -> DatabaseResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;
    debug!(count = applied.len(), "Applied pending migrations");
    Ok(())
}
