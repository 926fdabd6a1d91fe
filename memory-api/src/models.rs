use serde::{Deserialize, Serialize};

/// The sole domain entity: an item with a name and a price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    /// Validate an item received from a request body
    ///
    /// Names must be non-empty after trimming; prices must be finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !self.price.is_finite() {
            return Err("price must be a finite number".to_string());
        }
        if self.price < 0.0 {
            return Err(format!("price must not be negative, got {}", self.price));
        }
        Ok(())
    }
}

/// Response type for successful POST operations
#[derive(Serialize, Deserialize)]
pub struct CreateResponse {
    pub message: String,
    pub item: Item,
}

/// Response type for successful PUT operations
#[derive(Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub item: Item,
}

/// Response type for successful DELETE operations
///
/// Echoes the removed item so callers can tell what was dropped.
#[derive(Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub item: Item,
}
