//! Storage builder and handles.
//!
//! Provides a builder pattern for constructing the storage layer
//! and a handles struct for accessing the storage facades.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::storage::StorageError;
use crate::storage::db::{PoolOptions, SqlitePool};
use crate::storage::job_store::JobStore;

/// Path value selecting a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

/// Builder for constructing the storage layer.
pub struct StorageBuilder {
    db_path: PathBuf,
    pool_options: PoolOptions,
    seed_sample_jobs: bool,
}

impl StorageBuilder {
    /// Create a new storage builder for a database file.
    ///
    /// Pass [`MEMORY_PATH`] for a throwaway in-memory database.
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            pool_options: PoolOptions::default(),
            seed_sample_jobs: true,
        }
    }

    /// Set the maximum number of pooled connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.pool_options.max_connections = max;
        self
    }

    /// Set how long a session waits for a free connection.
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.pool_options.acquire_timeout = timeout;
        self
    }

    /// Insert the sample postings when the store is empty (default: true).
    pub fn seed_sample_jobs(mut self, seed: bool) -> Self {
        self.seed_sample_jobs = seed;
        self
    }

    /// SQLite connection URL for the configured path.
    pub fn connection_url(&self) -> String {
        if self.is_memory() {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite:{}?mode=rwc", self.db_path.display())
        }
    }

    fn is_memory(&self) -> bool {
        self.db_path.as_os_str() == MEMORY_PATH
    }

    /// Build the storage layer and return handles.
    ///
    /// Creates the schema and, when enabled, seeds an empty store before
    /// returning, so no request can observe a half-initialized database.
    pub async fn build(self) -> Result<StorageHandles, StorageError> {
        // Create parent directory if it doesn't exist
        if !self.is_memory()
            && let Some(parent) = self.db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Internal(format!(
                    "Failed to create database directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let url = self.connection_url();
        let pool = SqlitePool::connect(&url, self.pool_options).await?;
        let job_store = JobStore::new(pool.clone());

        {
            let mut session = job_store.session().await?;
            session.initialize().await?;
            if self.seed_sample_jobs {
                session.seed_if_empty().await?;
            }
        }

        Ok(StorageHandles { job_store, pool })
    }
}

/// Handles to the storage layer facades.
pub struct StorageHandles {
    /// Facade for job posting operations.
    pub job_store: JobStore,
    pool: SqlitePool,
}

impl StorageHandles {
    /// Gracefully shutdown the storage layer.
    ///
    /// Waits for checked-out sessions to be released, then closes the pool.
    pub async fn shutdown(self) -> Result<(), StorageError> {
        self.pool.close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_storage_builder_seeds_once() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("jobs.db");

        let handles = StorageBuilder::new(&db_path).build().await.unwrap();
        assert!(db_path.exists());
        assert_eq!(handles.job_store.session().await.unwrap().count().await.unwrap(), 5);
        handles.shutdown().await.unwrap();

        // Reopening an existing store keeps its contents.
        let handles = StorageBuilder::new(&db_path).build().await.unwrap();
        assert_eq!(handles.job_store.session().await.unwrap().count().await.unwrap(), 5);
        handles.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_storage_builder_without_seed() {
        let handles = StorageBuilder::new(MEMORY_PATH)
            .seed_sample_jobs(false)
            .build()
            .await
            .unwrap();
        assert_eq!(handles.job_store.session().await.unwrap().count().await.unwrap(), 0);
        handles.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_storage_roundtrip_across_reopen() {
        use crate::storage::NewJobPosting;

        let dir = tempdir().unwrap();
        let db_path = dir.path().join("roundtrip.db");

        let created = {
            let handles = StorageBuilder::new(&db_path)
                .seed_sample_jobs(false)
                .build()
                .await
                .unwrap();
            let created = handles
                .job_store
                .session()
                .await
                .unwrap()
                .create(&NewJobPosting {
                    title: "Rust Engineer".to_string(),
                    company: "Oxide".to_string(),
                    location: "Remote".to_string(),
                    salary: 120_000,
                    description: "Systems".to_string(),
                    skills: vec!["rust".to_string(), "c,c++".to_string()],
                })
                .await
                .unwrap();
            handles.shutdown().await.unwrap();
            created
        };

        let handles = StorageBuilder::new(&db_path).build().await.unwrap();
        let fetched = handles
            .job_store
            .session()
            .await
            .unwrap()
            .find_by_id(created.id)
            .await
            .unwrap();
        assert_eq!(fetched, Some(created));
        handles.shutdown().await.unwrap();
    }

    #[test]
    fn test_connection_url() {
        assert_eq!(
            StorageBuilder::new(MEMORY_PATH).connection_url(),
            "sqlite::memory:"
        );
        assert_eq!(
            StorageBuilder::new("data/jobs.db").connection_url(),
            "sqlite:data/jobs.db?mode=rwc"
        );
    }
}
