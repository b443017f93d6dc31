use axum::http::HeaderMap;

use super::gate::{path_is_protected, Gate, GateDecision};
use crate::config::SecurityConfig;
use crate::error::ApiError;

/// First gate in the chain: a static header name/value pair.
pub struct ApiKeyGate {
    enabled: bool,
    header: String,
    value: String,
    protected: Vec<String>,
}

impl ApiKeyGate {
    pub fn from_config(security: &SecurityConfig) -> Self {
        Self {
            enabled: security.api_key_gate_enabled,
            header: security.api_key_header.clone(),
            value: security.api_key_value.clone(),
            protected: security.protected_paths.clone(),
        }
    }
}

impl Gate for ApiKeyGate {
    fn name(&self) -> &'static str {
        "api-key"
    }

    fn check(&self, path: &str, headers: &HeaderMap) -> GateDecision {
        if !self.enabled || !path_is_protected(path, &self.protected) {
            return GateDecision::Continue;
        }

        match headers.get(self.header.as_str()) {
            Some(value) if value.as_bytes() == self.value.as_bytes() => GateDecision::Continue,
            // One fixed message for both the missing and the mismatched
            // case; the response never says which.
            _ => GateDecision::Reject(ApiError::unauthorized("Api-key header missing or incorrect.")),
        }
    }
}
