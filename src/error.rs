//! Application error type and its HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by services and repositories.
///
/// The HTTP layer is the only place these are translated into status codes
/// (see the [`IntoResponse`] impl).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller input failed a precondition.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No record exists for the requested identifier.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The storage backend rejected a write because the identifier is taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// The storage backend failed (I/O, connectivity, unexpected database error).
    #[error("{message}")]
    Repository { message: String, details: Value },

    /// A defect inside the service itself.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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
    pub fn repository(message: impl Into<String>, details: Value) -> Self {
        Self::Repository {
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

    /// Prefixes the message with operation context, keeping kind and details.
    ///
    /// ```
    /// use smallurl::AppError;
    ///
    /// let err = AppError::repository("connection reset", serde_json::json!({}))
    ///     .context("failed to delete abc");
    /// assert_eq!(err.to_string(), "failed to delete abc: connection reset");
    /// ```
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        let annotate = |message: String| format!("{context}: {message}");

        match self {
            Self::Validation { message, details } => Self::Validation {
                message: annotate(message),
                details,
            },
            Self::NotFound { message, details } => Self::NotFound {
                message: annotate(message),
                details,
            },
            Self::Conflict { message, details } => Self::Conflict {
                message: annotate(message),
                details,
            },
            Self::Repository { message, details } => Self::Repository {
                message: annotate(message),
                details,
            },
            Self::Internal { message, details } => Self::Internal {
                message: annotate(message),
                details,
            },
        }
    }

    /// HTTP status code for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Repository { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Repository { .. } => "repository_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Conflict { message, details }
            | Self::Repository { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Identifier already exists",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::repository("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::repository("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_context_keeps_kind_and_details() {
        let err = AppError::conflict("Identifier already exists", json!({ "id": "abc" }))
            .context("failed to delete abc");

        match err {
            AppError::Conflict { message, details } => {
                assert_eq!(message, "failed to delete abc: Identifier already exists");
                assert_eq!(details["id"], "abc");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_info() {
        let info = AppError::repository("Database error", json!({})).to_error_info();
        assert_eq!(info.code, "repository_error");
        assert_eq!(info.message, "Database error");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("Short URL not found", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
