use jsonwebtoken::Algorithm;

use crate::error::ConfigError;

/// Environment variable holding the HMAC signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET_KEY";

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Load the signing secret from the environment.
    ///
    /// A missing or empty `JWT_SECRET_KEY` is a startup failure; there is no
    /// fallback secret.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(JWT_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => Ok(Self::new(secret.into_bytes())),
            _ => Err(ConfigError::MissingSecret(JWT_SECRET_ENV)),
        }
    }
}
