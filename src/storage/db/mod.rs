//! Database abstraction layer.
//!
//! Wraps the sqlx SQLite pool so the rest of the storage layer never has to
//! care about connect options or pool sizing.
//!
//! # Example
//!
//! ```ignore
//! let pool = SqlitePool::connect("sqlite:jobs.db?mode=rwc", PoolOptions::default()).await?;
//! let mut conn = pool.acquire().await?;
//! ```

mod sqlite;

pub use sqlite::{DEFAULT_ACQUIRE_TIMEOUT, DEFAULT_MAX_CONNECTIONS, PoolOptions, SqlitePool};
