use crate::error::{ApiError, ErrorResponse};
use crate::models::{ItemInput, UpdateResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// PUT /items/:id handler - Replace an item's name and price
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item updated", body = UpdateResponse),
        (status = 400, description = "Invalid id or item", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<UpdateResponse>), ApiError> {
    // Parse and validate the id
    let id = id_str
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    input.validate().map_err(ApiError::InvalidItem)?;

    match state.store.update(id, &input.name, input.price).await? {
        Some(row) => {
            tracing::info!("Updated item {}", id);
            Ok((
                StatusCode::OK,
                Json(UpdateResponse {
                    message: "Item updated".to_string(),
                    item: row.into(),
                }),
            ))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
