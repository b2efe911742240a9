// Authentication middleware for protected routes

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::{error::AuthError, token::TokenService};

/// Identity of the caller, set by [`require_auth`] on every protected request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
}

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>`: split on single spaces it
/// has to yield two parts, the first being `Bearer` and the second
/// non-empty. Extra whitespace anywhere is rejected.
pub fn parse_bearer(value: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok(*token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Middleware that validates the bearer token and stores the caller's
/// identity in the request extensions.
///
/// Install with `axum::middleware::from_fn_with_state(tokens, require_auth)`.
pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let endpoint = request.uri().path().to_string();

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| {
            warn!("Missing Authorization header for endpoint: {}", endpoint);
            AuthError::MissingToken
        })?
        .to_str()
        .map_err(|_| {
            warn!("Non-ASCII Authorization header for endpoint: {}", endpoint);
            AuthError::MalformedHeader
        })?;

    let token = parse_bearer(auth_header).map_err(|e| {
        warn!("Authorization header is not 'Bearer <token>' for endpoint: {}", endpoint);
        e
    })?;

    let claims = tokens.validate(token)?;

    debug!(
        "Authenticated user_id={}, username={}, endpoint={}",
        claims.sub, claims.username, endpoint
    );

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Only present when the route sits behind require_auth
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
