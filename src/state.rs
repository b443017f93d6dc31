use std::sync::Arc;

use crate::config::SecurityConfig;
use crate::middleware::{ApiKeyGate, Gate, TokenGate};
use crate::store::DocumentStore;

/// Shared application state: the injected store handle, the security
/// configuration, and the gate chain built from it. Constructed once at
/// process start and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub security: Arc<SecurityConfig>,
    pub gates: Arc<Vec<Box<dyn Gate>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, security: SecurityConfig) -> Self {
        // Fixed order: API key first, then token.
        let gates: Vec<Box<dyn Gate>> = vec![
            Box::new(ApiKeyGate::from_config(&security)),
            Box::new(TokenGate::from_config(&security)),
        ];

        Self {
            store,
            security: Arc::new(security),
            gates: Arc::new(gates),
        }
    }
}
