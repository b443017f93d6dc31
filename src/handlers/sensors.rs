use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use bson::to_document;

use crate::error::ApiError;
use crate::models::{Sensor, SENSOR_COLLECTION};
use crate::state::AppState;

/// POST /store-sensor - register a sensor.
pub async fn store_sensor(
    State(state): State<AppState>,
    payload: Result<Json<Sensor>, JsonRejection>,
) -> Result<(StatusCode, Json<Sensor>), ApiError> {
    let Json(sensor) = payload?;
    sensor.validate()?;

    state.store.insert_one(SENSOR_COLLECTION, to_document(&sensor)?).await?;
    tracing::info!(sensor_id = sensor.sensor_id, "registered sensor");

    Ok((StatusCode::CREATED, Json(sensor)))
}
