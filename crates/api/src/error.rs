use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use dataviz_core::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for dataset failures. Implements [`IntoResponse`] to
/// produce the `{ "success": false, "error": ..., "message": ... }` body.
/// Every dataset failure maps to 500: a missing or malformed data file is a
/// server-side problem, not something the client can correct.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A dataset error from `dataviz-core` (missing file, bad JSON, I/O).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = match &self {
            AppError::Core(core) => {
                tracing::error!(error = %core, "Dataset processing failed");
                core.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                msg.clone()
            }
        };

        let body = json!({
            "success": false,
            "error": error,
            "message": "An error occurred during data processing.",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
