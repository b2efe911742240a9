// HTTP handlers for authentication endpoints

use axum::{extract::State, Json};

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, RegisterRequest, TokenResponse},
};
use crate::error::ErrorResponse;
use crate::models::MessageResponse;
use crate::extract::ValidatedJson;
use crate::AppState;

/// Register a new user
/// POST /register
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Invalid input or username taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    tracing::debug!("Registering user: {}", request.username);

    state
        .auth_service
        .register(&request.username, &request.password)
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// Login a user
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token issued", body = TokenResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    tracing::debug!("Login attempt for: {}", request.username);

    let token = state
        .auth_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
