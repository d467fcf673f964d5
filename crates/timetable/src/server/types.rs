/// Shared response types for the API server
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// A structured API error: a short machine-readable code plus a
/// human-readable message, serialized as `{"error": ..., "message": ...}`.
pub struct ApiErrorType {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl From<(StatusCode, &'static str, Option<String>)> for ApiErrorType {
    fn from((status, error, message): (StatusCode, &'static str, Option<String>)) -> Self {
        Self {
            status,
            error,
            message,
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.error,
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}
