mod api_doc;
mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use api_doc::ApiDoc;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use config::Config;
use db::ItemStore;
use state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("items-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = ItemStore::connect(&config.database_url).await?;
    let jwt = auth::JwtService::new(&config.jwt_secret);
    let state = AppState {
        store,
        jwt,
        config: Arc::new(config),
    };

    // Item routes sit behind the bearer-token check; health, login, and the
    // generated docs stay open.
    let protected = Router::new()
        .route(
            routes::ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::LOGIN, post(handlers::login_handler))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let addr = format!(
        "{}:{}",
        state.config.service_host, state.config.service_port
    );
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
