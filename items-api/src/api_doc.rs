use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    CreateResponse, DeleteResponse, ItemInput, ItemResponse, ListResponse, LoginRequest,
    LoginResponse, UpdateResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        version = "1.0.0",
        description = "A minimal item-management API backed by SQLite, gated by JWT bearer tokens"
    ),
    paths(
        handlers::health::health_handler,
        handlers::login::login_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::list::list_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            ItemInput,
            ItemResponse,
            CreateResponse,
            UpdateResponse,
            DeleteResponse,
            ListResponse,
            LoginRequest,
            LoginResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "auth", description = "Token issuance"),
        (name = "items", description = "Item CRUD operations (bearer token required)")
    )
)]
pub struct ApiDoc;

/// Registers the bearer token scheme referenced by the item routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
