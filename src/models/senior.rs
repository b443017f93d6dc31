use serde::{Deserialize, Serialize};

use super::{check_entity_id, ValidationError};

/// Collection name for seniors
pub const SENIOR_COLLECTION: &str = "seniors";

/// A tracked resident. `enabled` and `sensorId` are server-owned: callers
/// may send them on the creation path but the values are discarded there.
/// `sensorId` is set exactly once, through the assignment operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Senior {
    pub senior_id: i64,
    pub name: String,
    pub home_id: i64,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor_id: Option<i64>,
}

impl Senior {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_entity_id("seniorId", self.senior_id)?;
        check_entity_id("homeId", self.home_id)
    }
}

/// Request payload for binding a sensor to a senior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorAssignment {
    pub senior_id: i64,
    pub sensor_id: i64,
}

impl SensorAssignment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_entity_id("seniorId", self.senior_id)?;
        check_entity_id("sensorId", self.sensor_id)
    }
}
