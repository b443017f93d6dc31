use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::auth::{sign_token, Claims};
use crate::error::ApiError;
use crate::middleware::TOKEN_HEADER;
use crate::state::AppState;

/// GET /create-jwt - issue a short-lived service token. The token travels in
/// the `token` response header; the body stays empty.
pub async fn create_jwt(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let security = &state.security;
    let claims = Claims::new(&security.jwt_principal, security.jwt_expiry_hours);
    let token = sign_token(&claims, &security.jwt_secret, security.jwt_algorithm)?;

    Ok((StatusCode::CREATED, [(TOKEN_HEADER, token)]))
}
