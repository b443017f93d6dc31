use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use bson::to_document;

use crate::error::ApiError;
use crate::models::{Home, HOME_COLLECTION};
use crate::state::AppState;

/// POST /store-home - register a care home. Homes have no dependencies, so
/// there are no referential checks on this path.
pub async fn store_home(
    State(state): State<AppState>,
    payload: Result<Json<Home>, JsonRejection>,
) -> Result<(StatusCode, Json<Home>), ApiError> {
    let Json(home) = payload?;
    home.validate()?;

    state.store.insert_one(HOME_COLLECTION, to_document(&home)?).await?;
    tracing::info!(home_id = home.home_id, "registered home");

    Ok((StatusCode::CREATED, Json(home)))
}
