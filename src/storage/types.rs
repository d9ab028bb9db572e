//! Core data types for the storage layer.
//!
//! - [`JobPosting`]: a stored posting, as returned to callers
//! - [`NewJobPosting`]: the fields supplied when creating a posting
//! - [`SortOrder`]: salary ordering direction

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::storage::StorageError;

/// A job posting stored in the `jobs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Storage-assigned identifier, never reused.
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: i64,
    pub description: String,
    /// Ordered skill tokens.
    pub skills: Vec<String>,
    /// Starts false; only changed by the favourite toggles.
    pub favourite: bool,
}

/// Fields required to create a job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: i64,
    pub description: String,
    pub skills: Vec<String>,
}

impl NewJobPosting {
    /// Encode the skills as the JSON array stored in the `skills` column.
    pub(crate) fn skills_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(&self.skills)?)
    }
}

/// Salary sort direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub(crate) fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Raw row as read from SQLite, before the skills column is decoded.
#[derive(Debug, FromRow)]
pub(crate) struct JobRow {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: i64,
    pub description: String,
    pub skills: String,
    pub favourite: bool,
}

impl TryFrom<JobRow> for JobPosting {
    type Error = StorageError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let skills: Vec<String> = serde_json::from_str(&row.skills).map_err(|e| {
            StorageError::InvalidData(format!("job {} has malformed skills: {}", row.id, e))
        })?;

        Ok(Self {
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            salary: row.salary,
            description: row.description,
            skills,
            favourite: row.favourite,
        })
    }
}
