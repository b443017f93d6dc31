//! The authentication gate chain.
//!
//! Gates are an explicit ordered list evaluated before routing: each takes
//! the request path and headers and either lets the pipeline continue or
//! terminates it with a rejection. Handler dispatch only happens once every
//! gate has returned `Continue`.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

pub enum GateDecision {
    Continue,
    Reject(ApiError),
}

pub trait Gate: Send + Sync {
    fn name(&self) -> &'static str;

    fn check(&self, path: &str, headers: &HeaderMap) -> GateDecision;
}

/// A route is protected iff its path starts with one of the configured
/// prefixes. Query strings are not part of the matched path, so GET requests
/// carrying parameters pass through the same gate.
pub fn path_is_protected(path: &str, protected: &[String]) -> bool {
    protected.iter().any(|prefix| path.starts_with(prefix.as_str()))
}

/// Single middleware layer that runs the configured gate chain in order.
pub async fn auth_gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    for gate in state.gates.iter() {
        match gate.check(request.uri().path(), request.headers()) {
            GateDecision::Continue => {}
            GateDecision::Reject(error) => {
                tracing::warn!(
                    gate = gate.name(),
                    path = request.uri().path(),
                    "request rejected by authentication gate"
                );
                return error.into_response();
            }
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_covers_query_carrying_paths() {
        let protected = vec!["/get-senior".to_string()];
        // The router resolves "/get-senior?seniorId=1" to this path.
        assert!(path_is_protected("/get-senior", &protected));
        assert!(!path_is_protected("/create-jwt", &protected));
        assert!(!path_is_protected("/health", &protected));
    }

    #[test]
    fn unrelated_paths_are_not_protected() {
        let protected = vec!["/store-home".to_string(), "/store-senior".to_string()];
        assert!(!path_is_protected("/", &protected));
        assert!(path_is_protected("/store-home", &protected));
    }
}
