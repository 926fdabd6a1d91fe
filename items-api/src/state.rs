use crate::auth::JwtService;
use crate::config::Config;
use crate::db::ItemStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
    pub jwt: JwtService,
    pub config: Arc<Config>,
}
