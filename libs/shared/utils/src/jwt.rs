use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::debug;

use shared_config::MAX_TOKEN_TTL_HOURS;
use shared_models::auth::JwtClaims;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("JWT secret is not set")]
    MissingSecret,

    #[error("Token lifetime must be between 1 and {max} hours, got {0}", max = MAX_TOKEN_TTL_HOURS)]
    InvalidTtl(i64),

    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Signs an HS256 access token for `email`, valid for `ttl_hours`.
pub fn sign_token(email: &str, jwt_secret: &str, ttl_hours: i64) -> Result<String, TokenError> {
    if jwt_secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }
    if !(1..=MAX_TOKEN_TTL_HOURS).contains(&ttl_hours) {
        return Err(TokenError::InvalidTtl(ttl_hours));
    }

    let now = Utc::now();
    let claims = JwtClaims {
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )?;

    debug!("Issued token for {} expiring at {}", email, claims.exp);
    Ok(token)
}

/// Checks signature and expiry, returning the embedded claims.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<JwtClaims, TokenError> {
    if jwt_secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        debug!("Token validation failed: {}", e);
        e
    })?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{JwtTestUtils, TestUser};
    use assert_matches::assert_matches;

    const SECRET: &str = "test-secret-key-for-jwt-validation-must-be-long-enough";

    #[test]
    fn test_sign_then_validate() {
        let token = sign_token("a@x.com", SECRET, 24).unwrap();
        let claims = validate_token(&token, SECRET).unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_matches!(sign_token("a@x.com", "", 24), Err(TokenError::MissingSecret));
        assert_matches!(validate_token("a.b.c", ""), Err(TokenError::MissingSecret));
    }

    #[test]
    fn test_out_of_range_ttl_rejected() {
        assert_matches!(sign_token("a@x.com", SECRET, 0), Err(TokenError::InvalidTtl(0)));
        assert_matches!(sign_token("a@x.com", SECRET, -24), Err(TokenError::InvalidTtl(-24)));
        assert_matches!(
            sign_token("a@x.com", SECRET, i64::MAX),
            Err(TokenError::InvalidTtl(i64::MAX))
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let user = TestUser::patient("a@x.com");
        let token = JwtTestUtils::create_expired_token(&user, SECRET);

        assert_matches!(validate_token(&token, SECRET), Err(TokenError::Jwt(_)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let user = TestUser::patient("a@x.com");
        let token = JwtTestUtils::create_invalid_signature_token(&user);

        assert_matches!(validate_token(&token, SECRET), Err(TokenError::Jwt(_)));
    }

    #[test]
    fn test_hand_built_token_accepted() {
        let user = TestUser::admin("admin@x.com");
        let token = JwtTestUtils::create_test_token(&user, SECRET, Some(1));

        let claims = validate_token(&token, SECRET).unwrap();
        assert_eq!(claims.email, "admin@x.com");
    }

    #[test]
    fn test_malformed_token_rejected() {
        let token = JwtTestUtils::create_malformed_token();
        assert!(validate_token(&token, SECRET).is_err());
    }
}
