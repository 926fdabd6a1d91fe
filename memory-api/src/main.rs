mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use axum::{
    Router,
    routing::{get, put},
};
use config::Config;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("memory-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState::default();

    let app = Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::ITEM,
            put(handlers::update_handler).delete(handlers::delete_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
