// Authentication service - business logic layer

use std::sync::Arc;

use crate::auth::{
    error::AuthError,
    models::User,
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};

/// Authentication service coordinating registration and login
#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    token_service: Arc<TokenService>,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(user_repo: UserRepository, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Register a new user, storing only the password hash
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let password_hash = PasswordService::hash_password(password)?;
        let user = self.user_repo.create_user(username, &password_hash).await?;

        tracing::info!("Registered user id={} username={}", user.id, user.username);
        Ok(user)
    }

    /// Check credentials and issue a session token.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// `InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !PasswordService::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_service.issue(user.id, &user.username)?;

        tracing::info!("User id={} logged in", user.id);
        Ok(token)
    }
}
