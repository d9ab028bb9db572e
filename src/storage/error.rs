//! Storage-specific error types.
//!
//! All storage operations return [`StorageError`] on failure, which can be
//! matched to determine the underlying cause (database, missing record, etc.).

use thiserror::Error;

/// Errors that can occur in the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database operation failed (sqlx error).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// No job posting with the given id.
    #[error("job {0} not found")]
    NotFound(i64),

    /// Internal error (e.g., filesystem setup failure).
    #[error("internal error: {0}")]
    Internal(String),

    /// Invalid data in database (e.g., undecodable skills column).
    #[error("invalid data: {0}")]
    InvalidData(String),
}
