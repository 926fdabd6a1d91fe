use crate::error::{ApiError, ErrorResponse};
use crate::models::DeleteResponse;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// DELETE /items/:id handler - Remove an item
///
/// The removed row is echoed back so callers can tell what was dropped.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item removed", body = DeleteResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    // Parse and validate the id
    let id = id_str
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.delete(id).await? {
        Some(row) => {
            tracing::info!("Removed item {} ('{}')", id, row.name);
            Ok((
                StatusCode::OK,
                Json(DeleteResponse {
                    message: "Item removed".to_string(),
                    item: row.into(),
                }),
            ))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
