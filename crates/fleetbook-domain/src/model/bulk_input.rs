//! Bulk paste payload

use serde::{Deserialize, Deserializer, Serialize};

/// A block of pasted fleet text plus the metadata shared by every line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkFleetInput {
    /// One candidate record per line
    #[serde(deserialize_with = "null_as_empty")]
    pub bulk_text: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub livery: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub operator: String,
    /// Replaces the per-line vehicle type when non-empty
    pub vehicle_type: Option<String>,
}

impl BulkFleetInput {
    pub fn new(bulk_text: impl Into<String>, livery: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            bulk_text: bulk_text.into(),
            livery: livery.into(),
            operator: operator.into(),
            vehicle_type: None,
        }
    }

    pub fn with_vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = Some(vehicle_type.into());
        self
    }

    /// The override, if one was supplied and is non-empty
    pub fn vehicle_type_override(&self) -> Option<&str> {
        self.vehicle_type.as_deref().filter(|v| !v.is_empty())
    }
}

/// `null` reads as an empty string, the same as an absent key
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
