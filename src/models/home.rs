use serde::{Deserialize, Serialize};

use super::{check_entity_id, check_non_empty, ValidationError};

/// Collection name for care homes
pub const HOME_COLLECTION: &str = "homes";

/// Facility kind, a closed set. Serialized exactly as the wire literals, so
/// an out-of-set string fails deserialization before any handler logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HomeType {
    Nursing,
    Private,
}

/// A care facility record. The identifier is caller-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    pub home_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub home_type: HomeType,
}

impl Home {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_entity_id("homeId", self.home_id)?;
        check_non_empty("name", &self.name)
    }
}
