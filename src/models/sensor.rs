use serde::{Deserialize, Serialize};

use super::{check_entity_id, ValidationError};

/// Collection name for sensors
pub const SENSOR_COLLECTION: &str = "sensors";

/// A hardware unit. Immutable after registration; binding to a senior is
/// recorded on the senior document, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub sensor_id: i64,
    pub hardware_version: String,
    pub software_version: String,
}

impl Sensor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_entity_id("sensorId", self.sensor_id)
    }
}
