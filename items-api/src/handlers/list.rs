use crate::db::SortOrder;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{ItemResponse, ListQuery, ListResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::Query, extract::State, http::StatusCode};

/// GET /items handler - List items
///
/// Returns a paginated, filterable, and sortable list of items.
/// Query parameters:
/// - limit: Maximum number of results to return (optional)
/// - offset: Number of results to skip (optional, default: 0)
/// - prefix: Filter names starting with this value (optional)
/// - sort: Sort order - one of: id_asc, id_desc, name_asc, name_desc, price_asc, price_desc (optional, default: id_asc)
#[utoipa::path(
    get,
    path = routes::ITEMS,
    params(
        ("limit" = Option<u32>, Query, description = "Maximum number of results to return"),
        ("offset" = Option<u32>, Query, description = "Number of results to skip"),
        ("prefix" = Option<String>, Query, description = "Filter names starting with this value"),
        ("sort" = Option<String>, Query, description = "Sort order: id_asc, id_desc, name_asc, name_desc, price_asc, price_desc")
    ),
    responses(
        (status = 200, description = "List of items", body = ListResponse),
        (status = 400, description = "Invalid query parameter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<ListResponse>), ApiError> {
    // Parse and validate sort parameter
    let sort = if let Some(sort_str) = &query.sort {
        match sort_str.as_str() {
            "id_asc" => SortOrder::IdAsc,
            "id_desc" => SortOrder::IdDesc,
            "name_asc" => SortOrder::NameAsc,
            "name_desc" => SortOrder::NameDesc,
            "price_asc" => SortOrder::PriceAsc,
            "price_desc" => SortOrder::PriceDesc,
            _ => {
                return Err(ApiError::InvalidQueryParam(format!(
                    "sort must be one of: id_asc, id_desc, name_asc, name_desc, price_asc, price_desc, got '{}'",
                    sort_str
                )));
            }
        }
    } else {
        SortOrder::IdAsc // default
    };

    let limit = query.limit.map(|l| l as i64);
    let offset = query.offset.unwrap_or(0) as i64;

    let result = state
        .store
        .list(query.prefix.as_deref(), sort, limit, offset)
        .await?;

    let data: Vec<ItemResponse> = result.items.into_iter().map(Into::into).collect();

    let response = ListResponse {
        data,
        total_count: result.total_count,
    };

    tracing::info!(
        "Listed {} items (total: {}, prefix: {:?}, sort: {:?}, limit: {:?}, offset: {})",
        response.data.len(),
        response.total_count,
        query.prefix,
        sort,
        limit,
        offset
    );

    Ok((StatusCode::OK, Json(response)))
}
