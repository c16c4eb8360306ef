//! Application error type and its HTTP mapping.
//!
//! Every layer below HTTP returns [`AppError`]; "not found" is never an error
//! there (repositories return `Option`, counters return
//! [`Score::Absent`](crate::domain::entities::Score)). Handlers turn a missing
//! resource into [`AppError::NotFound`] so the response carries the code.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::repositories::CounterError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request input failed validation.
    #[error("validation failed: {issues}")]
    Validation { issues: Value },

    /// The requested resource does not exist; `message` is sent to the client.
    #[error("{message}")]
    NotFound { message: String },

    /// A link with the same (normalized) code already exists.
    #[error("duplicated code")]
    DuplicateCode,

    /// The link store failed.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// The metrics counter failed.
    #[error("counter error: {0}")]
    Counter(#[from] CounterError),
}

impl AppError {
    pub fn validation(issues: Value) -> Self {
        Self::Validation { issues }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn link_not_found(code: &str) -> Self {
        Self::not_found(format!("Link not found with code: {code}"))
    }

    pub fn metrics_not_found(code: &str) -> Self {
        Self::not_found(format!("Metrics not found with code: {code}"))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DuplicateCode;
        }

        AppError::Database(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let issues = serde_json::to_value(errors.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::validation(issues)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(json!({ "body": rejection.body_text() }))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::validation(json!({ "path": rejection.body_text() }))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { issues } => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Validation failed", "issues": issues }),
            ),
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, json!({ "message": message }))
            }
            AppError::DuplicateCode => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Duplicated code" }),
            ),
            err @ (AppError::Database(_) | AppError::Counter(_)) => {
                tracing::error!(error = %err, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
