use axum::http::HeaderMap;
use jsonwebtoken::Algorithm;

use super::gate::{path_is_protected, Gate, GateDecision};
use crate::auth::verify_token;
use crate::config::SecurityConfig;
use crate::error::ApiError;

/// The token travels in a header literally named `token`, on requests and on
/// the issuance response alike.
pub const TOKEN_HEADER: &str = "token";

/// Second gate in the chain: signed-token verification.
pub struct TokenGate {
    enabled: bool,
    secret: String,
    algorithm: Algorithm,
    principal: String,
    protected: Vec<String>,
}

impl TokenGate {
    pub fn from_config(security: &SecurityConfig) -> Self {
        Self {
            enabled: security.token_gate_enabled,
            secret: security.jwt_secret.clone(),
            algorithm: security.jwt_algorithm,
            principal: security.jwt_principal.clone(),
            protected: security.protected_paths.clone(),
        }
    }
}

impl Gate for TokenGate {
    fn name(&self) -> &'static str {
        "token"
    }

    fn check(&self, path: &str, headers: &HeaderMap) -> GateDecision {
        if !self.enabled || !path_is_protected(path, &self.protected) {
            return GateDecision::Continue;
        }

        let Some(raw) = headers.get(TOKEN_HEADER) else {
            return GateDecision::Reject(ApiError::unauthorized("No 'token' header in request."));
        };

        let Ok(token) = raw.to_str() else {
            return GateDecision::Reject(ApiError::unauthorized("Token failed."));
        };

        // Bad signature, expiry, and wrong principal all collapse into the
        // same fixed rejection.
        match verify_token(token, &self.secret, self.algorithm) {
            Ok(claims) if claims.username == self.principal => GateDecision::Continue,
            _ => GateDecision::Reject(ApiError::unauthorized("Token failed.")),
        }
    }
}
