//! Job posting storage.
//!
//! [`JobStore`] is the cloneable facade shared by request handlers. Each
//! request opens a [`JobSession`], which owns one pooled connection for its
//! lifetime and returns it to the pool when dropped, on every exit path.

use sqlx::pool::PoolConnection;
use sqlx::{Connection, Sqlite, SqliteConnection};

use crate::storage::db::SqlitePool;
use crate::storage::schema::init_schema;
use crate::storage::seed::sample_jobs;
use crate::storage::types::JobRow;
use crate::storage::{JobPosting, NewJobPosting, SortOrder, StorageError};

/// Columns selected for every posting query, in [`JobRow`] order.
const JOB_COLUMNS: &str = "id, title, company, location, salary, description, skills, favourite";

// =============================================================================
// Job Store
// =============================================================================

/// Job storage facade.
#[derive(Debug, Clone)]
pub struct JobStore {
    pool: SqlitePool,
}

impl JobStore {
    /// Create a new job store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a session holding one connection until dropped.
    pub async fn session(&self) -> Result<JobSession, StorageError> {
        let conn = self.pool.acquire().await?;
        Ok(JobSession { conn })
    }

    /// Check that the database answers queries.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(self.pool.inner()).await?;
        Ok(())
    }
}

// =============================================================================
// Job Session
// =============================================================================

/// A connection-scoped unit of work against the `jobs` table.
pub struct JobSession {
    conn: PoolConnection<Sqlite>,
}

impl JobSession {
    /// Create the schema if it does not exist yet.
    pub async fn initialize(&mut self) -> Result<(), StorageError> {
        init_schema(&mut self.conn).await
    }

    /// Insert the sample postings if the table is empty.
    ///
    /// Count and insert run in one transaction. Returns the number of rows
    /// inserted (zero when the table already held data).
    pub async fn seed_if_empty(&mut self) -> Result<usize, StorageError> {
        let mut tx = self.conn.begin().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            tracing::debug!(count, "Store already populated, skipping seed");
            return Ok(0);
        }

        let samples = sample_jobs();
        for job in &samples {
            insert_job(&mut tx, job).await?;
        }
        tx.commit().await?;

        tracing::info!(inserted = samples.len(), "Seeded sample job postings");
        Ok(samples.len())
    }

    /// Number of stored postings.
    pub async fn count(&mut self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(count)
    }

    /// Insert a posting and return it with its assigned id.
    pub async fn create(&mut self, job: &NewJobPosting) -> Result<JobPosting, StorageError> {
        insert_job(&mut self.conn, job).await
    }

    /// List all postings in id order.
    pub async fn list_all(&mut self) -> Result<Vec<JobPosting>, StorageError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY id"
        ))
        .fetch_all(&mut *self.conn)
        .await?;

        into_postings(rows)
    }

    /// Get a posting by id.
    pub async fn find_by_id(&mut self, id: i64) -> Result<Option<JobPosting>, StorageError> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        row.map(JobPosting::try_from).transpose()
    }

    /// Postings whose title, description or skills contain `query`.
    ///
    /// Skills are matched against their comma-joined form, so a query may
    /// span adjacent tokens. The query is matched literally (LIKE wildcards
    /// are escaped) and, per SQLite's LIKE, case-insensitively for ASCII.
    pub async fn search(&mut self, query: &str) -> Result<Vec<JobPosting>, StorageError> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            SELECT {JOB_COLUMNS} FROM jobs
            WHERE title LIKE ? ESCAPE '\'
               OR description LIKE ? ESCAPE '\'
               OR (
                   SELECT group_concat(json_each.value, ',') FROM json_each(jobs.skills)
               ) LIKE ? ESCAPE '\'
            ORDER BY id
            "#
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&mut *self.conn)
        .await?;

        into_postings(rows)
    }

    /// Set the favourite flag on a posting.
    ///
    /// Fails with [`StorageError::NotFound`] when no posting has `id`.
    /// Setting the current value again succeeds.
    pub async fn set_favourite(&mut self, id: i64, value: bool) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE jobs SET favourite = ? WHERE id = ?")
            .bind(value)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        Ok(())
    }

    /// List favourited postings in id order.
    pub async fn list_favourites(&mut self) -> Result<Vec<JobPosting>, StorageError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE favourite = 1 ORDER BY id"
        ))
        .fetch_all(&mut *self.conn)
        .await?;

        into_postings(rows)
    }

    /// List all postings ordered by salary, ties broken by id.
    pub async fn list_sorted_by_salary(
        &mut self,
        order: SortOrder,
    ) -> Result<Vec<JobPosting>, StorageError> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY salary {}, id ASC",
            order.as_sql()
        ))
        .fetch_all(&mut *self.conn)
        .await?;

        into_postings(rows)
    }
}

// =============================================================================
// Helpers
// =============================================================================

async fn insert_job(
    conn: &mut SqliteConnection,
    job: &NewJobPosting,
) -> Result<JobPosting, StorageError> {
    let skills = job.skills_json()?;

    let row = sqlx::query_as::<_, JobRow>(&format!(
        "INSERT INTO jobs (title, company, location, salary, description, skills, favourite)
         VALUES (?, ?, ?, ?, ?, ?, 0)
         RETURNING {JOB_COLUMNS}"
    ))
    .bind(&job.title)
    .bind(&job.company)
    .bind(&job.location)
    .bind(job.salary)
    .bind(&job.description)
    .bind(&skills)
    .fetch_one(&mut *conn)
    .await?;

    JobPosting::try_from(row)
}

fn into_postings(rows: Vec<JobRow>) -> Result<Vec<JobPosting>, StorageError> {
    rows.into_iter().map(JobPosting::try_from).collect()
}

/// Escape LIKE metacharacters so the query matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
