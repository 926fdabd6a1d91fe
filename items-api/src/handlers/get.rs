use crate::error::{ApiError, ErrorResponse};
use crate::models::ItemResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /items/:id handler - Retrieve a single item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    // Parse and validate the id
    let id = id_str
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.get(id).await? {
        Some(row) => {
            tracing::info!("Retrieved item {}", id);
            Ok((StatusCode::OK, Json(row.into())))
        }
        None => {
            tracing::info!("Item not found: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}
