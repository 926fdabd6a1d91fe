use crate::error::ApiError;
use crate::models::{CreateResponse, Item};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// POST /items handler - Append a new item
///
/// The new item lands at the end of the list; its index is the previous
/// list length.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    item.validate().map_err(ApiError::InvalidItem)?;

    let mut items = state.items.write().await;
    items.push(item.clone());

    tracing::info!(
        "Added item '{}' at index {}",
        item.name,
        items.len() - 1
    );
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            message: "Item added successfully".to_string(),
            item,
        }),
    ))
}
