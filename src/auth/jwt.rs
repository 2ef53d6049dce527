use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::claims::Claims;
use crate::error::AuthError;
use crate::state::security_config::SecurityConfig;

/// Verify a signed token and return its claims.
///
/// The raw token string is decoded against the configured secret with the
/// configured algorithm. Expiry is enforced only when the token carries an
/// `exp` claim; tokens without one verify.
///
/// Errors:
/// - Elapsed expiry → `AuthError::ExpiredToken`
/// - Anything else (bad signature, malformed token, missing `user_id`) →
///   `AuthError::InvalidToken`
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    // Default Validation requires exp; this contract accepts tokens without it.
    let mut validation = Validation::new(security.algorithm);
    validation.required_spec_claims.clear();

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    })
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::{json, Value};

    use super::verify_token;
    use crate::error::AuthError;
    use crate::state::security_config::SecurityConfig;

    fn config() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    fn sign(claims: &Value, security: &SecurityConfig) -> String {
        encode(
            &Header::new(security.algorithm),
            claims,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap()
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    #[test]
    fn verifies_token_with_user_and_company() {
        let security = config();
        let token = sign(
            &json!({"user_id": "u1", "company_id": "c1", "exp": now() + 900}),
            &security,
        );

        let claims = verify_token(&token, &security).unwrap();
        assert_eq!(claims.user_id, json!("u1"));
        assert_eq!(claims.company_id, Some(json!("c1")));
    }

    #[test]
    fn company_id_defaults_to_none() {
        let security = config();
        let token = sign(&json!({"user_id": "u1", "exp": now() + 900}), &security);

        let claims = verify_token(&token, &security).unwrap();
        assert_eq!(claims.company_id, None);
    }

    #[test]
    fn token_without_exp_verifies() {
        let security = config();
        let token = sign(&json!({"user_id": "u1"}), &security);

        assert!(verify_token(&token, &security).is_ok());
    }

    #[test]
    fn expired_token_is_classified_as_expired() {
        let security = config();
        let token = sign(&json!({"user_id": "u1", "exp": now() - 900}), &security);

        assert_eq!(
            verify_token(&token, &security),
            Err(AuthError::ExpiredToken)
        );
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let signer = SecurityConfig::new("secret-A".as_bytes());
        let verifier = SecurityConfig::new("secret-B".as_bytes());
        let token = sign(&json!({"user_id": "u1", "exp": now() + 900}), &signer);

        assert_eq!(
            verify_token(&token, &verifier),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn missing_user_id_is_invalid() {
        let security = config();
        let token = sign(&json!({"company_id": "c1", "exp": now() + 900}), &security);

        assert_eq!(
            verify_token(&token, &security),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn malformed_token_is_invalid() {
        let security = config();

        assert_eq!(
            verify_token("not-a-token", &security),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn numeric_user_id_is_accepted() {
        let security = config();
        let token = sign(&json!({"user_id": 42, "exp": now() + 900}), &security);

        let claims = verify_token(&token, &security).unwrap();
        assert_eq!(claims.user_id, json!(42));
    }
}
