use crate::error::{ApiError, ErrorResponse};
use crate::models::{LoginRequest, LoginResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// POST /login handler - Exchange the admin credentials for a bearer token
///
/// The credential check is a single fixed username/password pair from the
/// configuration; there is no user table.
#[utoipa::path(
    post,
    path = routes::LOGIN,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Wrong username or password", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    if request.username != state.config.admin_username
        || request.password != state.config.admin_password
    {
        tracing::warn!("Failed login attempt for '{}'", request.username);
        return Err(ApiError::Unauthorized(
            "wrong username or password".to_string(),
        ));
    }

    let access_token = state.jwt.create_token(&request.username)?;

    tracing::info!("Issued token for '{}'", request.username);
    Ok((StatusCode::OK, Json(LoginResponse { access_token })))
}
