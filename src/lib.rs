pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod posts;
pub mod products;
pub mod validation;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use auth::{AuthService, TokenService, UserRepository};
use models::HealthResponse;
use posts::PostRepository;
use products::ProductRepository;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        products::handlers::create_product,
        products::handlers::list_products,
        products::handlers::get_product,
        products::handlers::update_product,
        products::handlers::delete_product,
        posts::handlers::create_post,
        posts::handlers::list_posts,
        posts::handlers::get_post,
        posts::handlers::update_post,
        posts::handlers::delete_post,
    ),
    components(
        schemas(
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::TokenResponse,
            models::MessageResponse,
            models::HealthResponse,
            error::ErrorResponse,
            products::Product,
            products::CreateProduct,
            products::UpdateProduct,
            posts::Post,
            posts::CreatePost,
            posts::UpdatePost,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "auth", description = "Registration and login"),
        (name = "products", description = "Products owned by the caller"),
        (name = "posts", description = "Posts owned by the caller")
    ),
    info(
        title = "Tenant API",
        version = "0.1.0",
        description = "Multi-tenant REST API with JWT authentication"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Application state shared across handlers
///
/// Built once at startup and handed to the router; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub auth_service: AuthService,
    pub products: ProductRepository,
    pub posts: PostRepository,
}

impl AppState {
    pub fn new(db: PgPool, tokens: Arc<TokenService>) -> Self {
        Self {
            auth_service: AuthService::new(UserRepository::new(db.clone()), tokens.clone()),
            products: ProductRepository::new(db.clone()),
            posts: PostRepository::new(db),
            tokens,
        }
    }
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Creates and configures the application router
///
/// `/register`, `/login` and `/health` are public. Everything under
/// `/products` and `/posts` runs behind the bearer-token middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route(
            "/products",
            post(products::create_product).get(products::list_products),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route(
            "/posts/:id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route_layer(from_fn_with_state(state.tokens.clone(), auth::require_auth));

    let public = Router::new()
        .route("/health", get(health))
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests;
