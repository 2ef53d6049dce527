use thiserror::Error;

/// Numeric code shared by every authentication failure envelope.
pub const AUTH_ERROR_CODE: i64 = 4001;

const MISSING_TOKEN_MSG: &str = "Authorization not found, Please send valid token in headers";
const EXPIRED_TOKEN_MSG: &str = "Authentication token has expired";
const INVALID_TOKEN_MSG: &str = "Authorization has failed, Please send valid token.";

/// Caller-visible authentication failures.
///
/// All three map to HTTP 401 and the same numeric code; the response
/// `message` string is the only differentiator callers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{MISSING_TOKEN_MSG}")]
    MissingToken,
    #[error("{EXPIRED_TOKEN_MSG}")]
    ExpiredToken,
    #[error("{INVALID_TOKEN_MSG}")]
    InvalidToken,
}

impl AuthError {
    pub fn code(&self) -> i64 {
        AUTH_ERROR_CODE
    }

    /// Fixed response message for this failure kind.
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => MISSING_TOKEN_MSG,
            AuthError::ExpiredToken => EXPIRED_TOKEN_MSG,
            AuthError::InvalidToken => INVALID_TOKEN_MSG,
        }
    }
}

/// Startup-only configuration failures. These never reach the request path;
/// the process refuses to start instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingSecret(&'static str),
}
