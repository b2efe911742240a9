use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_text;

/// A post row, always owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Post {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hello")]
    pub title: String,
    #[schema(example = "First post")]
    pub description: String,
    #[schema(example = 1)]
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for POST /posts; both fields are required
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePost {
    #[schema(example = "Hello")]
    #[validate(custom = "validate_text", length(max = 255))]
    pub title: String,
    #[schema(example = "First post")]
    #[validate(custom = "validate_text")]
    pub description: String,
}

/// Body for PUT /posts/:id; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePost {
    #[schema(example = "Hello again")]
    #[validate(custom = "validate_text", length(max = 255))]
    pub title: Option<String>,
    #[validate(custom = "validate_text")]
    pub description: Option<String>,
}

impl Post {
    /// Overlay the fields present in `changes`
    pub fn apply(&mut self, changes: UpdatePost) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
    }
}
