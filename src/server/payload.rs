//! Request body for job creation.
//!
//! The body is deserialized into [`CreateJobBody`] and then checked with
//! `validator` rules. Both steps report the first offending field by name.
//! Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::server::ApiError;
use crate::storage::NewJobPosting;

/// JSON body accepted by `POST /jobs`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobBody {
    #[validate(
        length(min = 1, message = "must not be empty"),
        custom(function = "not_blank")
    )]
    pub title: String,
    #[validate(
        length(min = 1, message = "must not be empty"),
        custom(function = "not_blank")
    )]
    pub company: String,
    #[validate(
        length(min = 1, message = "must not be empty"),
        custom(function = "not_blank")
    )]
    pub location: String,
    pub salary: i64,
    pub description: String,
    pub skills: Vec<String>,
}

impl From<CreateJobBody> for NewJobPosting {
    fn from(body: CreateJobBody) -> Self {
        Self {
            title: body.title,
            company: body.company,
            location: body.location,
            salary: body.salary,
            description: body.description,
            skills: body.skills,
        }
    }
}

/// Decode and validate a JSON body into a [`NewJobPosting`].
pub fn parse_new_job(body: Value) -> Result<NewJobPosting, ApiError> {
    if !body.is_object() {
        return Err(ApiError::validation("body", "must be a JSON object"));
    }

    let body: CreateJobBody = serde_path_to_error::deserialize(body).map_err(decode_error)?;
    body.validate().map_err(first_invalid_field)?;

    Ok(body.into())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

fn decode_error(err: serde_path_to_error::Error<serde_json::Error>) -> ApiError {
    let path = err.path().to_string();
    let message = err.inner().to_string();

    if let Some(rest) = message.strip_prefix("missing field `") {
        let field = rest.split('`').next().unwrap_or(rest);
        return ApiError::validation(field, "field required");
    }
    if message.starts_with("invalid type: null") {
        return ApiError::validation(path, "field required");
    }
    if path == "." {
        return ApiError::validation("body", message);
    }
    ApiError::validation(path, message)
}

fn first_invalid_field(errors: ValidationErrors) -> ApiError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let Some((field, errs)) = fields.into_iter().next() else {
        return ApiError::validation("body", "invalid");
    };
    let message = errs
        .first()
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| "invalid".to_string());

    ApiError::validation(field.to_string(), message)
}
