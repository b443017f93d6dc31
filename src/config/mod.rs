use jsonwebtoken::Algorithm;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Endpoint paths are configuration constants, shared by the router and the
/// gate chain so the protected set can never drift from the routes.
pub mod paths {
    pub const STORE_HOME: &str = "/store-home";
    pub const STORE_SENSOR: &str = "/store-sensor";
    pub const STORE_SENIOR: &str = "/store-senior";
    pub const ASSIGN_SENSOR: &str = "/assign-sensor";
    pub const GET_SENIOR: &str = "/get-senior";
    pub const CREATE_JWT: &str = "/create-jwt";

    /// Path prefixes the authentication gates apply to. Token issuance and
    /// the health/info endpoints stay public.
    pub fn protected() -> Vec<String> {
        [STORE_HOME, STORE_SENSOR, STORE_SENIOR, ASSIGN_SENSOR, GET_SENIOR]
            .iter()
            .map(|p| p.to_string())
            .collect()
    }
}

/// Placeholder secrets shipped for local development. Startup warns when
/// either is still in effect.
pub const PLACEHOLDER_API_KEY_VALUE: &str = "not-an-actual-key";
pub const PLACEHOLDER_JWT_SECRET: &str = "not-an-actual-secret";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub api_key_gate_enabled: bool,
    pub api_key_header: String,
    pub api_key_value: String,
    pub token_gate_enabled: bool,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub jwt_principal: String,
    pub jwt_expiry_hours: u64,
    pub protected_paths: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Store overrides
        if let Ok(v) = env::var("STORE_URI") {
            self.store.uri = v;
        }
        if let Ok(v) = env::var("STORE_DATABASE") {
            self.store.database = v;
        }

        // Security overrides
        if let Ok(v) = env::var("API_KEY_GATE_ENABLED") {
            self.security.api_key_gate_enabled = v.parse().unwrap_or(self.security.api_key_gate_enabled);
        }
        if let Ok(v) = env::var("API_KEY_HEADER") {
            self.security.api_key_header = v.to_ascii_lowercase();
        }
        if let Ok(v) = env::var("API_KEY_VALUE") {
            self.security.api_key_value = v;
        }
        if let Ok(v) = env::var("TOKEN_GATE_ENABLED") {
            self.security.token_gate_enabled = v.parse().unwrap_or(self.security.token_gate_enabled);
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("JWT_ALGORITHM") {
            self.security.jwt_algorithm = v.parse().unwrap_or(self.security.jwt_algorithm);
        }
        if let Ok(v) = env::var("JWT_PRINCIPAL") {
            self.security.jwt_principal = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            store: StoreConfig {
                uri: "mongodb://localhost:27017".to_string(),
                database: "carelink".to_string(),
            },
            security: SecurityConfig {
                api_key_gate_enabled: true,
                api_key_header: "x-api-key".to_string(),
                api_key_value: PLACEHOLDER_API_KEY_VALUE.to_string(),
                token_gate_enabled: true,
                jwt_secret: PLACEHOLDER_JWT_SECRET.to_string(),
                jwt_algorithm: Algorithm::HS256,
                jwt_principal: "carelink-service".to_string(),
                jwt_expiry_hours: 1,
                protected_paths: paths::protected(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 8000 },
            ..Self::development()
        }
    }
}

/// Warn when the shipped placeholder secrets are still in effect. Real
/// values come from the environment or a .env file.
pub fn warn_on_placeholder_secrets(security: &SecurityConfig) {
    if security.api_key_value == PLACEHOLDER_API_KEY_VALUE || security.jwt_secret == PLACEHOLDER_JWT_SECRET {
        tracing::warn!(
            "placeholder secrets in use; set API_KEY_VALUE and JWT_SECRET before exposing this service"
        );
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
