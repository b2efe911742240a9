use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{validate_positive_price, validate_text};

/// A product row, always owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = 1)]
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for POST /products; both fields are required
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Widget")]
    #[validate(custom = "validate_text", length(max = 255))]
    pub name: String,
    #[schema(example = 9.99)]
    #[validate(custom = "validate_positive_price")]
    pub price: f64,
}

/// Body for PUT /products/:id; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "Gadget")]
    #[validate(custom = "validate_text", length(max = 255))]
    pub name: Option<String>,
    #[schema(example = 5.0)]
    #[validate(custom = "validate_positive_price")]
    pub price: Option<f64>,
}

impl Product {
    /// Overlay the fields present in `changes`
    pub fn apply(&mut self, changes: UpdateProduct) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
    }
}
