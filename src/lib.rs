//! Job board backend library.
//!
//! This crate provides the storage layer and HTTP API for a small job board:
//! postings can be created, listed, searched, marked as favourites and sorted
//! by salary. It can be used as a library, or run as a standalone server with
//! the `jobboard` executable.
//!
//! # Architecture
//!
//! - **Storage**: SQLite persistence with connection-scoped sessions
//! - **Server**: Axum router exposing the JSON API
//! - **Config**: YAML configuration with CLI/env overrides
//!
//! # Example
//!
//! ```rust,ignore
//! use jobboard::{StorageBuilder, server::{AppState, create_router}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let handles = StorageBuilder::new("jobs.db").build().await?;
//!     let app = create_router(AppState { job_store: handles.job_store.clone() });
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod server;
pub mod storage;

pub use storage::{
    JobPosting, JobSession, JobStore, NewJobPosting, SortOrder, StorageBuilder, StorageError,
    StorageHandles,
};
