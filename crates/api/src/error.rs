use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use querylog_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `querylog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Validation failures carry field-level detail back to the
            // caller and are not logged as server failures.
            AppError::Core(CoreError::Validation(violations)) => {
                let body = json!({
                    "ok": false,
                    "code": "VALIDATION_ERROR",
                    "error": "Validation failed",
                    "details": violations,
                });
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }

            // Storage failures are logged with full detail server-side and
            // surfaced to the caller as an opaque server error.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                let body = json!({
                    "ok": false,
                    "code": "INTERNAL_ERROR",
                    "error": "An internal error occurred",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
