//! Entity payloads and their field validators.
//!
//! Validators are pure: they take a deserialized payload and either accept it
//! or return a typed `ValidationError` naming the offending field. Status
//! codes are applied later, at the error boundary.

use thiserror::Error;

pub mod home;
pub mod senior;
pub mod sensor;

pub use home::{Home, HomeType, HOME_COLLECTION};
pub use senior::{Senior, SensorAssignment, SENIOR_COLLECTION};
pub use sensor::{Sensor, SENSOR_COLLECTION};

/// The store's native integer ceiling (32-bit signed). Identifiers must fit
/// below it so they round-trip the document encoding unchanged.
pub const STORE_INT_CEILING: i64 = 1 << 31;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be a positive integer below 2^31, got {value}")]
    IdOutOfRange { field: &'static str, value: i64 },
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

/// Caller-assigned identifiers are strictly positive and below the store's
/// 32-bit ceiling.
pub fn check_entity_id(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 || value >= STORE_INT_CEILING {
        return Err(ValidationError::IdOutOfRange { field, value });
    }
    Ok(())
}

pub(crate) fn check_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}
