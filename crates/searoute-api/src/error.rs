//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps planner and validation errors to HTTP status codes and returns JSON
//! bodies with an error code and message. Internal error details are never
//! exposed in responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use searoute_core::{PlanError, ValidationError};

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, present only for client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A request field failed validation (422).
    #[error("validation error: {message}")]
    Validation {
        /// Message.
        message: String,
        /// Offending field, when known.
        field: Option<&'static str>,
    },

    /// Request body could not be parsed, or names an unknown port (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let (message, details) = match &self {
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal server error");
                ("An internal error occurred".to_string(), None)
            }
            Self::Validation { field, .. } => (
                self.to_string(),
                field.map(|f| serde_json::json!({ "field": f })),
            ),
            other => (other.to_string(), None),
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::InvalidParameter { name, .. } => Some(*name),
            _ => None,
        };
        Self::Validation {
            message: err.to_string(),
            field,
        }
    }
}

/// An unknown port is a client mistake in the request body, not a
/// validation failure of a well-formed value.
impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::UnknownPort(code) => Self::BadRequest(format!("unknown port: {code}")),
            PlanError::Validation(err) => err.into(),
        }
    }
}
