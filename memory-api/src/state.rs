use crate::models::Item;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// Items live in a single in-process list and are addressed by index.
/// The list is lost on restart.
#[derive(Clone, Default)]
pub struct AppState {
    pub items: Arc<RwLock<Vec<Item>>>,
}
