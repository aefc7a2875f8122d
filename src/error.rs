//! Application error type and its HTTP representation.
//!
//! Every failure that crosses a service boundary is an [`AppError`]. Messages
//! are meant for API clients and never contain storage internals; the
//! underlying cause is logged where the error is created.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::api::dto::envelope::Status;

/// Error body sent to clients.
///
/// ```json
/// { "status": "Error", "code": "not_found", "error": "Short link not found" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: Status,
    pub code: &'static str,
    pub error: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input, password mismatch.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Bad credentials at login, or a missing/invalid/expired bearer token.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Unique constraint hit (alias or email already taken).
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Backing store did not answer in time.
    #[error("{message}")]
    Unavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },

    /// Startup-only: the process must not start.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::Unavailable { .. } => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
            AppError::Internal { .. } | AppError::Configuration { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }

    pub fn to_envelope(&self) -> ErrorEnvelope {
        let (_, code) = self.status_and_code();
        let details = match self {
            AppError::Validation { details, .. }
            | AppError::Unauthorized { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Unavailable { details, .. }
            | AppError::Internal { details, .. } => details.clone(),
            AppError::Configuration { .. } => Value::Null,
        };

        ErrorEnvelope {
            status: Status::Error,
            code,
            error: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        let mut response = (status, Json(self.to_envelope())).into_response();

        // RFC 6750
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            tracing::debug!(constraint = ?db.constraint(), "unique constraint violation");
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        match e {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found", Value::Null),
            sqlx::Error::PoolTimedOut => {
                tracing::error!("database pool timed out");
                AppError::unavailable("Storage is temporarily unavailable", Value::Null)
            }
            other => {
                tracing::error!(error = %other, "database error");
                AppError::internal("Storage error", Value::Null)
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("Validation failed", json!(errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "failed to decode request body");
        AppError::bad_request(
            "Failed to decode request",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
