//! Database schema definitions.
//!
//! There is no migration mechanism: the table is created on first run and
//! schema changes require manual intervention.

use sqlx::SqliteConnection;

use crate::storage::StorageError;

/// SQL statement for creating the jobs table.
///
/// `AUTOINCREMENT` keeps ids from being reused.
/// Skills are stored as a JSON array string so tokens survive unchanged.
pub const JOBS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL,
    company     TEXT    NOT NULL,
    location    TEXT    NOT NULL,
    salary      INTEGER NOT NULL,
    description TEXT    NOT NULL,
    skills      TEXT    NOT NULL DEFAULT '[]',
    favourite   BOOLEAN NOT NULL DEFAULT 0
);
"#;

/// Initialize the database schema.
///
/// Creates the jobs table if it doesn't exist. Safe to call repeatedly.
pub async fn init_schema(conn: &mut SqliteConnection) -> Result<(), StorageError> {
    sqlx::query(JOBS_TABLE_DDL).execute(&mut *conn).await?;

    tracing::info!("Database schema initialized");
    Ok(())
}
