use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateResponse, ItemInput};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// POST /items handler - Insert a new item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created", body = CreateResponse),
        (status = 400, description = "Invalid item", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(input): Json<ItemInput>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    input.validate().map_err(ApiError::InvalidItem)?;

    let row = state.store.insert(&input.name, input.price).await?;

    tracing::info!("Created item {} ('{}')", row.id, row.name);
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            message: "Item added successfully".to_string(),
            item: row.into(),
        }),
    ))
}
