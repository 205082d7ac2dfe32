use axum::{http::StatusCode, Json};
use serde_json::json;

/// Error shape every handler returns: a status plus `{"error": "..."}`.
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}
