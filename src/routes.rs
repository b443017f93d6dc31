use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::paths;
use crate::handlers::{homes, seniors, sensors, tokens};
use crate::middleware::auth_gate_middleware;
use crate::state::AppState;

/// Build the full application router. The gate chain wraps every route; the
/// gates themselves decide which paths they apply to, so the public
/// endpoints pass through untouched.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(service_info))
        .route("/health", get(health))
        .route(paths::CREATE_JWT, get(tokens::create_jwt))
        // Protected record surface
        .merge(record_routes())
        // Global middleware
        .layer(axum::middleware::from_fn_with_state(state.clone(), auth_gate_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn record_routes() -> Router<AppState> {
    Router::new()
        .route(paths::STORE_HOME, post(homes::store_home))
        .route(paths::STORE_SENSOR, post(sensors::store_sensor))
        .route(paths::STORE_SENIOR, post(seniors::store_senior))
        .route(paths::ASSIGN_SENSOR, put(seniors::assign_sensor))
        .route(paths::GET_SENIOR, get(seniors::get_senior))
}

async fn service_info() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Carelink API",
            "version": version,
            "description": "Care-facility record service",
            "endpoints": {
                "store_home": format!("POST {} (protected)", paths::STORE_HOME),
                "store_sensor": format!("POST {} (protected)", paths::STORE_SENSOR),
                "store_senior": format!("POST {} (protected)", paths::STORE_SENIOR),
                "assign_sensor": format!("PUT {} (protected)", paths::ASSIGN_SENSOR),
                "get_senior": format!("GET {}?seniorId=<id> (protected)", paths::GET_SENIOR),
                "create_jwt": format!("GET {} (public)", paths::CREATE_JWT),
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": { "status": "ok", "store": "ok" }
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "store unavailable"
                })),
            )
        }
    }
}
