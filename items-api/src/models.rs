use crate::db::ItemRow;
use serde::{Deserialize, Serialize};

/// Request body for create and update operations
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemInput {
    pub name: String,
    pub price: f64,
}

impl ItemInput {
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

/// A stored item as returned by the API, with ISO 8601 timestamps
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ItemRow> for ItemResponse {
    fn from(row: ItemRow) -> Self {
        ItemResponse {
            id: row.id,
            name: row.name,
            price: row.price,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Response type for successful POST operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateResponse {
    pub message: String,
    pub item: ItemResponse,
}

/// Response type for successful PUT operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateResponse {
    pub message: String,
    pub item: ItemResponse,
}

/// Response type for successful DELETE operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub item: ItemResponse,
}

/// Query parameters for list endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub prefix: Option<String>,
    pub sort: Option<String>,
}

/// Response type for list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ListResponse {
    pub data: Vec<ItemResponse>,
    pub total_count: i64,
}

/// Request body for the login endpoint
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response type for a successful login
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let input = ItemInput {
            name: "notebook".to_string(),
            price: 12.5,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let input = ItemInput {
            name: "".to_string(),
            price: 1.0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let input = ItemInput {
            name: "notebook".to_string(),
            price: -1.0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_infinite_price_rejected() {
        let input = ItemInput {
            name: "notebook".to_string(),
            price: f64::INFINITY,
        };
        assert!(input.validate().is_err());
    }
}
