//! The uniform response envelope returned by every endpoint.
//!
//! Every route, success or failure, answers with
//! `{ "status": bool, "message": string, "data": T|null }`. Use the
//! constructors here instead of ad-hoc `serde_json::json!` blocks so the
//! shape stays consistent.

use serde::Serialize;

/// Standard `{ status, message, data }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: true,
            message: message.to_string(),
            data: Some(data),
        }
    }

    /// Failed response with `data: null`.
    ///
    /// Mostly failures are produced by `AppError`; this is for the one spot
    /// (empty search) where a failure envelope still ships with HTTP 200.
    pub fn failure(message: &str) -> Self {
        Self {
            status: false,
            message: message.to_string(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload (`data: null`), e.g. deletes.
    pub fn ok(message: &str) -> Self {
        Self {
            status: true,
            message: message.to_string(),
            data: None,
        }
    }
}
