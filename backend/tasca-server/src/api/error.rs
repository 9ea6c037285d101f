//! REST API error types
//!
//! Every failure is rendered as the same JSON shape:
//! `{"error": ..., "code": ..., "details"?: ..., "field"?: ...}`.

use tasca_core::CoreError;
use tasca_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    /// Store- or parser-provided explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Input rejected by the handler or the store (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        details: Option<String>,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Path id is not a valid task id (400)
    #[error("Invalid id: {message} {location}")]
    InvalidId {
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Unreadable request body (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: None,
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Map a store failure for the operation described by `context`.
    ///
    /// Data the store refused (validators, constraints) is the client's
    /// fault and keeps the store's explanation; anything else is a 500 that
    /// does not leak store internals.
    #[track_caller]
    pub fn from_store(e: DbError, context: &str) -> Self {
        if e.is_rejection() {
            let field = match &e {
                DbError::Validation { field, .. } => field.clone(),
                _ => None,
            };

            return ApiError::Validation {
                message: context.to_string(),
                details: Some(e.detail()),
                field,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        log::error!("{}: {}", context, e);
        ApiError::Internal {
            message: context.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. }
            | ApiError::InvalidId { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                error: message,
                code: "NOT_FOUND",
                details: None,
                field: None,
            },
            ApiError::Validation {
                message,
                details,
                field,
                ..
            } => ApiErrorBody {
                error: message,
                code: "VALIDATION_ERROR",
                details,
                field,
            },
            ApiError::InvalidId {
                message, details, ..
            } => ApiErrorBody {
                error: message,
                code: "INVALID_ID",
                details,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                error: message,
                code: "INTERNAL_ERROR",
                details: None,
                field: None,
            },
            ApiError::BadRequest {
                message, details, ..
            } => ApiErrorBody {
                error: message,
                code: "BAD_REQUEST",
                details,
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Task ids are UUIDs
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::InvalidId {
            message: "Invalid task id".to_string(),
            details: Some(e.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                details: None,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Malformed or mistyped JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: "Invalid JSON body".to_string(),
            details: Some(rejection.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
