use crate::error::ApiError;
use crate::models::{Item, UpdateResponse};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// PUT /items/:index handler - Replace the item at an index
pub async fn update_handler(
    State(state): State<AppState>,
    Path(index_str): Path<String>,
    Json(item): Json<Item>,
) -> Result<(StatusCode, Json<UpdateResponse>), ApiError> {
    // Parse and validate the index
    let index = index_str
        .parse::<usize>()
        .map_err(|_| ApiError::InvalidIndex(index_str.clone()))?;

    item.validate().map_err(ApiError::InvalidItem)?;

    let mut items = state.items.write().await;
    let slot = items.get_mut(index).ok_or(ApiError::ItemNotFound(index))?;
    *slot = item.clone();

    tracing::info!("Updated item at index {}", index);
    Ok((
        StatusCode::OK,
        Json(UpdateResponse {
            message: "Item updated".to_string(),
            item,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use crate::handlers::create::create_handler;
    use axum::{
        Router,
        body::Body,
        http::Request,
        routing::{post, put},
    };
    use tower::ServiceExt;

    fn setup_test_app() -> (Router, AppState) {
        let state = AppState::default();

        let app = Router::new()
            .route(crate::routes::ITEMS, post(create_handler))
            .route(crate::routes::ITEM, put(update_handler))
            .with_state(state.clone());
        (app, state)
    }

    async fn create_item(app: &Router, name: &str, price: f64) {
        let item = serde_json::json!({ "name": name, "price": price });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/items")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&item).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_update_endpoint_success() {
        let (app, state) = setup_test_app();
        create_item(&app, "old name", 1.0).await;

        let updated = serde_json::json!({ "name": "new name", "price": 2.5 });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/0")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&updated).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: UpdateResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.item.name, "new name");

        let items = state.items.read().await;
        assert_eq!(items[0].price, 2.5);
    }

    #[tokio::test]
    async fn test_update_endpoint_out_of_range() {
        let (app, _state) = setup_test_app();
        create_item(&app, "only item", 1.0).await;

        let updated = serde_json::json!({ "name": "new name", "price": 2.5 });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/5")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&updated).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Item not found"));
    }

    #[tokio::test]
    async fn test_update_endpoint_invalid_index() {
        let (app, _state) = setup_test_app();

        let updated = serde_json::json!({ "name": "new name", "price": 2.5 });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/not-a-number")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&updated).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Invalid index"));
    }

    #[tokio::test]
    async fn test_update_endpoint_negative_index() {
        let (app, _state) = setup_test_app();
        create_item(&app, "only item", 1.0).await;

        let updated = serde_json::json!({ "name": "new name", "price": 2.5 });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/-1")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&updated).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        // Negative indexes never parse as usize
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_endpoint_rejects_invalid_item() {
        let (app, state) = setup_test_app();
        create_item(&app, "old name", 1.0).await;

        let updated = serde_json::json!({ "name": "", "price": 2.5 });
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/items/0")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_string(&updated).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // The stored item is untouched
        let items = state.items.read().await;
        assert_eq!(items[0].name, "old name");
    }
}
