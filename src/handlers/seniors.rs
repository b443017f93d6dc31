use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use bson::{doc, from_document, to_document};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::integrity;
use crate::models::{check_entity_id, Senior, SensorAssignment, SENIOR_COLLECTION};
use crate::state::AppState;

/// POST /store-senior - register a senior with an existing home.
pub async fn store_senior(
    State(state): State<AppState>,
    payload: Result<Json<Senior>, JsonRejection>,
) -> Result<(StatusCode, Json<Senior>), ApiError> {
    let Json(mut senior) = payload?;
    senior.validate()?;

    integrity::home_must_exist(state.store.as_ref(), senior.home_id).await?;

    // `enabled` and `sensorId` are server-owned on the creation path;
    // whatever the caller sent is discarded.
    senior.enabled = false;
    senior.sensor_id = None;

    state.store.insert_one(SENIOR_COLLECTION, to_document(&senior)?).await?;
    tracing::info!(senior_id = senior.senior_id, home_id = senior.home_id, "registered senior");

    Ok((StatusCode::CREATED, Json(senior)))
}

/// PUT /assign-sensor - bind a sensor to a senior.
///
/// Check order is fixed so the earliest failing precondition determines the
/// reported error: senior exists, sensor unbound, sensor exists. The single
/// mutating operation only runs once all three have passed.
pub async fn assign_sensor(
    State(state): State<AppState>,
    payload: Result<Json<SensorAssignment>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(assignment) = payload?;
    assignment.validate()?;

    let store = state.store.as_ref();
    integrity::senior_must_exist(store, assignment.senior_id).await?;
    integrity::sensor_not_already_assigned(store, assignment.sensor_id).await?;
    integrity::sensor_must_exist(store, assignment.sensor_id).await?;

    store
        .find_one_and_update(
            SENIOR_COLLECTION,
            doc! { "seniorId": assignment.senior_id },
            doc! { "$set": { "sensorId": assignment.sensor_id } },
        )
        .await?;
    tracing::info!(
        senior_id = assignment.senior_id,
        sensor_id = assignment.sensor_id,
        "assigned sensor to senior"
    );

    Ok(Json(json!({
        "message": format!(
            "Sensor {} assigned to senior {}.",
            assignment.sensor_id, assignment.senior_id
        )
    })))
}

#[derive(Debug, Deserialize)]
pub struct SeniorQuery {
    #[serde(rename = "seniorId")]
    pub senior_id: i64,
}

/// GET /get-senior?seniorId=<id> - fetch a senior by identifier. The
/// store-assigned `_id` is stripped before the record leaves the service.
pub async fn get_senior(
    State(state): State<AppState>,
    query: Result<Query<SeniorQuery>, QueryRejection>,
) -> Result<Json<Senior>, ApiError> {
    let Query(query) = query?;
    check_entity_id("seniorId", query.senior_id)?;

    let found = state
        .store
        .find_one(SENIOR_COLLECTION, doc! { "seniorId": query.senior_id })
        .await?;

    let Some(mut document) = found else {
        return Err(ApiError::not_found(format!("Senior {} doesn't exist.", query.senior_id)));
    };

    document.remove("_id");
    let senior: Senior = from_document(document)?;
    Ok(Json(senior))
}
