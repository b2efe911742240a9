// JWT token generation and validation service

use crate::auth::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user_id
    pub username: String,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at timestamp
}

/// Token service for JWT operations
///
/// Tokens are stateless: validity depends only on the HS256 signature and
/// the `exp` claim. There is no revocation list, so a token stays usable
/// until it expires.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_duration: i64, // in seconds
}

impl TokenService {
    /// Default token lifetime
    pub const DEFAULT_TTL_HOURS: i64 = 24;

    /// Create a new TokenService with secret key and a lifetime in hours
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_duration: ttl_hours.saturating_mul(3600),
        }
    }

    /// Token lifetime in seconds
    pub fn token_duration(&self) -> i64 {
        self.token_duration
    }

    /// Issue a token for the given user, valid from now
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, AuthError> {
        self.issue_at(user_id, username, Utc::now().timestamp())
    }

    /// Issue a token as if it had been created at `issued_at` (unix seconds)
    pub fn issue_at(&self, user_id: i32, username: &str, issued_at: i64) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.token_duration),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                _ => AuthError::InvalidToken,
            })
    }
}
