use crate::models::Item;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /items handler - List all items
///
/// Returns the full list in insertion order. Indexes into this list are
/// the addresses used by the update and delete endpoints.
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.items.read().await;

    tracing::info!("Listed {} items", items.len());
    (StatusCode::OK, Json(items.clone()))
}
