use std::sync::Arc;

use anyhow::{Context, Result};
use jsonwebtoken::Algorithm;
use serde_json::{json, Value};

use carelink_api::config::{paths, SecurityConfig};
use carelink_api::routes;
use carelink_api::state::AppState;
use carelink_api::store::MemoryStore;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY_VALUE: &str = "integration-test-key";
pub const JWT_SECRET: &str = "integration-test-secret";
pub const JWT_PRINCIPAL: &str = "carelink-service";

pub fn test_security() -> SecurityConfig {
    SecurityConfig {
        api_key_gate_enabled: true,
        api_key_header: API_KEY_HEADER.to_string(),
        api_key_value: API_KEY_VALUE.to_string(),
        token_gate_enabled: true,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_algorithm: Algorithm::HS256,
        jwt_principal: JWT_PRINCIPAL.to_string(),
        jwt_expiry_hours: 1,
        protected_paths: paths::protected(),
    }
}

/// One router served on an ephemeral port, backed by a fresh in-memory
/// store, so every test starts from empty collections.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub token: String,
}

impl TestApp {
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(test_security()).await
    }

    pub async fn spawn_with(security: SecurityConfig) -> Result<Self> {
        let state = AppState::new(Arc::new(MemoryStore::new()), security);
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server");
        });

        let client = reqwest::Client::new();

        // Acquire a token the way clients do, through the public endpoint.
        let response = client.get(format!("{base_url}{}", paths::CREATE_JWT)).send().await?;
        let token = response
            .headers()
            .get("token")
            .context("create-jwt response carries no token header")?
            .to_str()?
            .to_string();

        Ok(Self { base_url, client, token })
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header(API_KEY_HEADER, API_KEY_VALUE)
            .header("token", &self.token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<reqwest::Response> {
        Ok(self
            .client
            .put(self.url(path))
            .header(API_KEY_HEADER, API_KEY_VALUE)
            .header("token", &self.token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn get(&self, path_and_query: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(self.url(path_and_query))
            .header(API_KEY_HEADER, API_KEY_VALUE)
            .header("token", &self.token)
            .send()
            .await?)
    }

    // Fixture helpers

    pub async fn register_home(&self, home_id: i64) -> Result<reqwest::Response> {
        self.post(
            paths::STORE_HOME,
            &json!({ "homeId": home_id, "name": "Test Home", "type": "NURSING" }),
        )
        .await
    }

    pub async fn register_sensor(&self, sensor_id: i64) -> Result<reqwest::Response> {
        self.post(
            paths::STORE_SENSOR,
            &json!({ "sensorId": sensor_id, "hardwareVersion": "v1", "softwareVersion": "1.0" }),
        )
        .await
    }

    pub async fn register_senior(&self, senior_id: i64, home_id: i64) -> Result<reqwest::Response> {
        self.post(
            paths::STORE_SENIOR,
            &json!({ "seniorId": senior_id, "name": "Test Senior", "homeId": home_id }),
        )
        .await
    }

    pub async fn fetch_senior(&self, senior_id: i64) -> Result<reqwest::Response> {
        self.get(&format!("{}?seniorId={}", paths::GET_SENIOR, senior_id)).await
    }
}
