use crate::error::ApiError;
use crate::models::DeleteResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// DELETE /items/:index handler - Remove the item at an index
///
/// Removal shifts every later item down by one, so previously handed-out
/// indexes past the removed slot are invalidated.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(index_str): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    // Parse and validate the index
    let index = index_str
        .parse::<usize>()
        .map_err(|_| ApiError::InvalidIndex(index_str.clone()))?;

    let mut items = state.items.write().await;
    if index >= items.len() {
        return Err(ApiError::ItemNotFound(index));
    }
    let deleted = items.remove(index);

    tracing::info!("Removed item '{}' from index {}", deleted.name, index);
    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            message: "Item removed".to_string(),
            item: deleted,
        }),
    ))
}
