//! API error type and its JSON response shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A request field is missing, blank, or has the wrong type.
    #[error("invalid field '{field}': {message}")]
    Validation { field: String, message: String },

    /// The request body or parameters could not be parsed at all.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The referenced job posting does not exist.
    #[error("Job not found")]
    NotFound,

    /// Storage failure. The detail is logged, never sent to the client.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    /// Shorthand for a field-level validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let field = match err {
            ApiError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed");
        }
        let body = Json(ErrorResponse::from(&self));
        (self.status_code(), body).into_response()
    }
}
