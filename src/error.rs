// Error handling for the resource controllers
// Provides the shared error type and its HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::{debug, error};
use utoipa::ToSchema;

/// Main error type for the product and post handlers
///
/// Every variant renders as `{"error": "<message>"}` with the status shown
/// below. Ownership mismatches are reported as `NotFound` so callers cannot
/// probe for other users' resources.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing request fields
    /// Maps to HTTP 400 Bad Request
    #[error("{0}")]
    Validation(String),

    /// Resource absent or owned by someone else
    /// Maps to HTTP 404 Not Found
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Database operation errors
    /// Maps to HTTP 500, details stay in the logs
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// JSON body for every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Product not found")]
    pub error: String,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to send to clients
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(msg) => debug!("Validation error: {}", msg),
            ApiError::NotFound { resource } => debug!("{} not found", resource),
            ApiError::Database(db_error) => error!("Database error: {:?}", db_error),
        }

        let body = ErrorResponse {
            error: self.client_message(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Convert validator errors to ApiError
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}
