//! Storage Layer
//!
//! SQLite persistence for job postings via sqlx:
//! - **Pool**: shared connection pool with WAL journaling
//! - **Sessions**: one pooled connection per unit of work, released on drop
//!
//! # Components
//!
//! - [`JobStore`] / [`JobSession`]: job posting CRUD, search, favourites, sorting
//! - [`StorageBuilder`] / [`StorageHandles`]: initialization and lifecycle management

mod builder;
pub mod db;
mod error;
pub mod job_store;
mod schema;
pub mod seed;
mod types;

pub use builder::{MEMORY_PATH, StorageBuilder, StorageHandles};
pub use error::StorageError;
pub use job_store::{JobSession, JobStore};
pub use types::{JobPosting, NewJobPosting, SortOrder};
