//! Web server module for the job board.
//!
//! Provides the HTTP/JSON API over the job store. Every handler opens one
//! storage session, performs a single operation, and drops the session
//! before the response is written.

mod error;
pub mod payload;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

pub use error::{ApiError, ErrorResponse};

use crate::storage::{JobPosting, JobStore, SortOrder};
use payload::parse_new_job;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub job_store: JobStore,
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db: Option<String>,
}

/// Fixed acknowledgment for the root route.
#[derive(Serialize)]
struct HomeResponse {
    message: &'static str,
}

/// Acknowledgment for favourite toggles.
#[derive(Serialize)]
struct FavouriteResponse {
    msg: &'static str,
}

/// Query parameters for the search API.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

type ApiResult<T> = Result<T, ApiError>;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let app_state = Arc::new(state);

    Router::new()
        .route("/", get(home_handler))
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .route("/jobs", get(list_jobs_handler).post(add_job_handler))
        .route("/jobs/search", get(search_jobs_handler))
        .route("/jobs/salary_asc", get(salary_asc_handler))
        .route("/jobs/salary_desc", get(salary_desc_handler))
        .route("/jobs/{job_id}", get(get_job_handler))
        .route("/jobs/{job_id}/favourite", post(add_favourite_handler))
        .route("/jobs/{job_id}/unfavourite", post(remove_favourite_handler))
        .route("/favourites", get(list_favourites_handler))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Extract the job id from the path, reporting bad ids as validation errors.
fn job_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|_| ApiError::validation("job_id", "must be an integer"))
}

// =============================================================================
// Probes
// =============================================================================

async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "AI Job Board API is running",
    })
}

/// Liveness probe.
async fn healthz_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        db: None,
    })
}

/// Readiness probe that checks SQLite availability.
async fn readyz_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.job_store.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "ok".to_string(),
            db: Some("ready".to_string()),
        })
        .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "not_ready".to_string(),
                    db: Some("unavailable".to_string()),
                }),
            )
                .into_response()
        }
    }
}

// =============================================================================
// Jobs
// =============================================================================

async fn add_job_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<JobPosting>)> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let new_job = parse_new_job(body)?;

    let job = state.job_store.session().await?.create(&new_job).await?;

    tracing::info!(id = job.id, title = %job.title, "Created job posting");
    Ok((StatusCode::CREATED, Json(job)))
}

async fn list_jobs_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<JobPosting>>> {
    let jobs = state.job_store.session().await?.list_all().await?;
    Ok(Json(jobs))
}

async fn get_job_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<JobPosting>> {
    let id = job_id(path)?;
    let job = state
        .job_store
        .session()
        .await?
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(job))
}

async fn search_jobs_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<JobPosting>>> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let query = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::validation("query", "must not be empty"))?;

    let jobs = state.job_store.session().await?.search(&query).await?;

    tracing::debug!(query = %query, matches = jobs.len(), "Searched job postings");
    Ok(Json(jobs))
}

// =============================================================================
// Favourites
// =============================================================================

async fn add_favourite_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<FavouriteResponse>> {
    let id = job_id(path)?;
    state.job_store.session().await?.set_favourite(id, true).await?;

    tracing::info!(id, "Added job posting to favourites");
    Ok(Json(FavouriteResponse {
        msg: "Added to favourites",
    }))
}

async fn remove_favourite_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<FavouriteResponse>> {
    let id = job_id(path)?;
    state.job_store.session().await?.set_favourite(id, false).await?;

    tracing::info!(id, "Removed job posting from favourites");
    Ok(Json(FavouriteResponse {
        msg: "Removed from favourites",
    }))
}

async fn list_favourites_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<JobPosting>>> {
    let jobs = state.job_store.session().await?.list_favourites().await?;
    Ok(Json(jobs))
}

// =============================================================================
// Sorting
// =============================================================================

async fn sorted_by_salary(state: &AppState, order: SortOrder) -> ApiResult<Json<Vec<JobPosting>>> {
    let jobs = state
        .job_store
        .session()
        .await?
        .list_sorted_by_salary(order)
        .await?;

    tracing::debug!(%order, count = jobs.len(), "Listed job postings by salary");
    Ok(Json(jobs))
}

async fn salary_asc_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<JobPosting>>> {
    sorted_by_salary(&state, SortOrder::Asc).await
}

async fn salary_desc_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<JobPosting>>> {
    sorted_by_salary(&state, SortOrder::Desc).await
}
