//! Referential-integrity checks.
//!
//! Each check issues exactly one read against the injected store and returns
//! a typed failure when its precondition does not hold. Callers apply them in
//! a fixed order so the earliest failing precondition determines the reported
//! error. No check mutates state; the read-then-act window this leaves under
//! concurrent assignment is a documented limitation.

use bson::doc;
use thiserror::Error;

use crate::models::{HOME_COLLECTION, SENIOR_COLLECTION, SENSOR_COLLECTION};
use crate::store::{DocumentStore, StoreError};

#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("Can't assign senior to home ID {0} (home doesn't exist).")]
    HomeMissing(i64),
    #[error("Senior {0} doesn't exist. Register the senior first, then assign a sensor.")]
    SeniorMissing(i64),
    #[error("Sensor {0} already belongs to a senior.")]
    SensorAlreadyAssigned(i64),
    #[error("Sensor ID {0} doesn't exist.")]
    SensorMissing(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Applied when creating a senior: the referenced home must exist.
pub async fn home_must_exist(store: &dyn DocumentStore, home_id: i64) -> Result<(), IntegrityError> {
    match store.find_one(HOME_COLLECTION, doc! { "homeId": home_id }).await? {
        Some(_) => Ok(()),
        None => Err(IntegrityError::HomeMissing(home_id)),
    }
}

/// Applied before assignment: the target senior must exist.
pub async fn senior_must_exist(store: &dyn DocumentStore, senior_id: i64) -> Result<(), IntegrityError> {
    match store.find_one(SENIOR_COLLECTION, doc! { "seniorId": senior_id }).await? {
        Some(_) => Ok(()),
        None => Err(IntegrityError::SeniorMissing(senior_id)),
    }
}

/// Applied before assignment: a sensor belongs to at most one senior, so no
/// senior document may already carry this sensor id.
pub async fn sensor_not_already_assigned(
    store: &dyn DocumentStore,
    sensor_id: i64,
) -> Result<(), IntegrityError> {
    match store.find_one(SENIOR_COLLECTION, doc! { "sensorId": sensor_id }).await? {
        Some(_) => Err(IntegrityError::SensorAlreadyAssigned(sensor_id)),
        None => Ok(()),
    }
}

/// Applied before assignment: the sensor being bound must exist.
pub async fn sensor_must_exist(store: &dyn DocumentStore, sensor_id: i64) -> Result<(), IntegrityError> {
    match store.find_one(SENSOR_COLLECTION, doc! { "sensorId": sensor_id }).await? {
        Some(_) => Ok(()),
        None => Err(IntegrityError::SensorMissing(sensor_id)),
    }
}
