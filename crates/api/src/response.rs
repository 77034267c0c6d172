//! Shared response envelope for API handlers.
//!
//! All movie endpoints answer with a `{ "success": bool, "data": ...,
//! "message": "..." }` envelope. Use [`send`] instead of ad-hoc
//! `serde_json::json!` bodies to get compile-time type safety and one
//! consistent serialization path for successes and failures alike.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Standard `{ success, data, message }` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    /// Derived from the HTTP status: `true` for 2xx responses.
    pub success: bool,
    /// Payload; serialized as `null` when absent.
    pub data: Option<T>,
    /// Human-readable outcome description; empty on plain reads.
    pub message: String,
}

/// Build an enveloped JSON response for `status`.
///
/// The `success` flag is derived from the status code, so error statuses
/// produce `success: false` without a separate code path.
pub fn send<T: Serialize>(
    status: StatusCode,
    data: Option<T>,
    message: impl Into<String>,
) -> Response {
    let envelope = Envelope {
        success: status.is_success(),
        data,
        message: message.into(),
    };
    (status, axum::Json(envelope)).into_response()
}
