use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by a service token. The shape is part of the external
/// interface: `{"username": <principal>, "exp": <UTC timestamp>}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,
}

impl Claims {
    pub fn new(principal: &str, valid_for_hours: u64) -> Self {
        let expiration = Utc::now() + Duration::hours(valid_for_hours as i64);
        Self {
            username: principal.to_string(),
            exp: expiration.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token generation failed: {0}")]
    Generation(String),
    #[error("token verification failed: {0}")]
    Verification(String),
    #[error("signing key is empty")]
    EmptyKey,
}

pub fn sign_token(claims: &Claims, secret: &str, algorithm: Algorithm) -> Result<String, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptyKey);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::new(algorithm), claims, &encoding_key)
        .map_err(|e| TokenError::Generation(e.to_string()))
}

/// Verify signature and expiry; the caller still has to check the principal.
pub fn verify_token(token: &str, secret: &str, algorithm: Algorithm) -> Result<Claims, TokenError> {
    if secret.is_empty() {
        return Err(TokenError::EmptyKey);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::new(algorithm))
        .map_err(|e| TokenError::Verification(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn sign_and_verify_round_trip() {
        let claims = Claims::new("carelink-service", 1);
        let token = sign_token(&claims, SECRET, Algorithm::HS256).unwrap();

        let decoded = verify_token(&token, SECRET, Algorithm::HS256).unwrap();
        assert_eq!(decoded.username, "carelink-service");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new("carelink-service", 1);
        let token = sign_token(&claims, SECRET, Algorithm::HS256).unwrap();

        assert!(verify_token(&token, "some-other-secret", Algorithm::HS256).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Expired well past the default 60s validation leeway.
        let claims = Claims {
            username: "carelink-service".to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = sign_token(&claims, SECRET, Algorithm::HS256).unwrap();

        assert!(verify_token(&token, SECRET, Algorithm::HS256).is_err());
    }

    #[test]
    fn empty_secret_is_rejected() {
        let claims = Claims::new("carelink-service", 1);
        assert!(matches!(sign_token(&claims, "", Algorithm::HS256), Err(TokenError::EmptyKey)));
    }
}
