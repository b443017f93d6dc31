use std::sync::Arc;

use anyhow::Context;

use carelink_api::config;
use carelink_api::routes;
use carelink_api::state::AppState;
use carelink_api::store::MongoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up STORE_URI, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = config::config();
    tracing::info!("starting carelink-api in {:?} mode", config.environment);
    config::warn_on_placeholder_secrets(&config.security);

    let store = MongoStore::connect(&config.store.uri, &config.store.database)
        .await
        .context("failed to connect to the document store")?;

    let state = AppState::new(Arc::new(store), config.security.clone());
    let app = routes::app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("carelink-api listening on http://{}", bind_addr);
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
