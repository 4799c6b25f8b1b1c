use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every failure becomes the `{ status: false, message, data }` envelope at
/// HTTP 400. The wire contract is a binary success/failure split rather
/// than distinct 404/422/500 codes, so clients that only look at `status`
/// keep working.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A referenced record does not exist. Carries the endpoint-specific
    /// message text the API exposes (e.g. "Record Not Exist.").
    #[error("{0}")]
    NotFound(&'static str),

    /// One or more actor ids in a movie create/update did not resolve.
    #[error("Invalid Actor assigned.")]
    InvalidActor,

    /// Declarative field validation failed; the field errors ship in `data`.
    #[error("Validation Failed.")]
    Validation(#[from] validator::ValidationErrors),

    /// A database error from sqlx. Logged, never surfaced to the caller.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The envelope message and optional `data` payload for this error.
    fn envelope_parts(&self) -> (String, Option<serde_json::Value>) {
        match self {
            AppError::NotFound(message) => ((*message).to_string(), None),
            AppError::InvalidActor => ("Invalid Actor assigned.".to_string(), None),
            AppError::Validation(errors) => (
                "Validation Failed.".to_string(),
                serde_json::to_value(errors).ok(),
            ),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                ("Something went wrong".to_string(), None)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (message, data) = self.envelope_parts();
        let body = json!({
            "status": false,
            "message": message,
            "data": data,
        });
        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}
