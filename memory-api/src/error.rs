use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure mode to an HTTP status code and a JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter was not a valid list index
    InvalidIndex(String),
    /// Index was out of range for the current list
    ItemNotFound(usize),
    /// Request body failed validation
    InvalidItem(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidIndex(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid index: expected a non-negative integer, got '{}'", raw),
            ),
            ApiError::ItemNotFound(index) => (
                StatusCode::NOT_FOUND,
                format!("Item not found at index {}", index),
            ),
            ApiError::InvalidItem(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid item: {}", msg))
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
