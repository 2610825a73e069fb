//! Application error type and its HTTP mapping.
//!
//! Response bodies:
//!
//! - not found: `{"error": "<message>"}`
//! - rejected input: `{"errors": ["validation errors"]}` or `{"errors": ["missing fields"]}`
//! - anything else: `{"error": "Internal server error"}`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Body message for constraint violations.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Body message for payloads lacking a required key.
pub const MISSING_FIELDS: &str = "missing fields";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct ErrorsBody {
    errors: Vec<&'static str>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("validation failed: {reason}")]
    Validation { reason: String },

    #[error("missing fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
    pub fn missing_fields(fields: Vec<String>) -> Self {
        Self::MissingFields { fields }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            AppError::Validation { reason } => {
                tracing::debug!(%reason, "Rejected request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorsBody {
                        errors: vec![VALIDATION_ERRORS],
                    }),
                )
                    .into_response()
            }
            AppError::MissingFields { fields } => {
                tracing::debug!(?fields, "Rejected request with missing fields");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorsBody {
                        errors: vec![MISSING_FIELDS],
                    }),
                )
                    .into_response()
            }
            AppError::Internal { message } => {
                tracing::error!(%message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_foreign_key_violation() {
                return AppError::validation(format!(
                    "referenced row does not exist ({})",
                    db.constraint().unwrap_or("foreign key")
                ));
            }
            if db.is_check_violation() {
                return AppError::validation(format!(
                    "check constraint violated ({})",
                    db.constraint().unwrap_or("check")
                ));
            }
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::validation(e.to_string())
    }
}

/// `required` failures win over every other rule.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut missing: Vec<String> = errors
            .field_errors()
            .iter()
            .filter(|(_, errs)| errs.iter().any(|e| e.code == "required"))
            .map(|(field, _)| field.to_string())
            .collect();

        if missing.is_empty() {
            return AppError::validation(errors.to_string());
        }

        missing.sort();
        AppError::missing_fields(missing)
    }
}
