// HTTP handlers for product endpoints

use axum::{extract::State, Json};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ErrorResponse};
use crate::extract::{ResourceId, ValidatedJson};
use crate::models::MessageResponse;
use crate::products::{CreateProduct, Product, UpdateProduct};
use crate::AppState;

const RESOURCE: &str = "Product";

/// Handler for POST /products
/// Creates a product owned by the caller
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateProduct>,
) -> Result<Json<Product>, ApiError> {
    tracing::debug!("Creating product '{}' for user {}", payload.name, user.user_id);

    let product = state
        .products
        .create(user.user_id, &payload.name, payload.price)
        .await?;

    tracing::info!("Created product id={} for user {}", product.id, user.user_id);
    Ok(Json(product))
}

/// Handler for GET /products
/// Lists the caller's products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "The caller's products", body = Vec<Product>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list_owned(user.user_id).await?;

    tracing::debug!("Retrieved {} products for user {}", products.len(), user.user_id);
    Ok(Json(products))
}

/// Handler for GET /products/:id
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ResourceId(id): ResourceId,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .products
        .find_owned(id, user.user_id)
        .await?
        .ok_or(ApiError::NotFound { resource: RESOURCE })?;

    Ok(Json(product))
}

/// Handler for PUT /products/:id
/// Partial update: omitted fields keep their stored values
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid input data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ResourceId(id): ResourceId,
    changes: Result<ValidatedJson<UpdateProduct>, ApiError>,
) -> Result<Json<Product>, ApiError> {
    tracing::debug!("Updating product id={} for user {}", id, user.user_id);

    // Ownership is resolved before the body, so a foreign id is always 404
    if state.products.find_owned(id, user.user_id).await?.is_none() {
        return Err(ApiError::NotFound { resource: RESOURCE });
    }
    let ValidatedJson(changes) = changes?;

    let product = state
        .products
        .update_owned(id, user.user_id, changes)
        .await?
        .ok_or(ApiError::NotFound { resource: RESOURCE })?;

    tracing::info!("Updated product id={}", id);
    Ok(Json(product))
}

/// Handler for DELETE /products/:id
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ResourceId(id): ResourceId,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.products.delete_owned(id, user.user_id).await? {
        return Err(ApiError::NotFound { resource: RESOURCE });
    }

    tracing::info!("Deleted product id={}", id);
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
