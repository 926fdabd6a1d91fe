use crate::error::HealthResponse;
use axum::{Json, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// The in-memory variant has no external dependencies, so this always
/// reports healthy while the process is up.
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
