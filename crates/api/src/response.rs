//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "success": true, "data": ..., "message": ... }`
//! envelope; the failure side of the same shape is produced by
//! [`crate::error::AppError`].

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(aggregates, "Data processed and retrieved successfully.")))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in a success envelope with the given message.
    pub fn ok(data: T, message: &str) -> Self {
        Self {
            success: true,
            data,
            message: message.to_string(),
        }
    }
}
