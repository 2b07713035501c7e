//! Fleet record type definitions

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One vehicle's tracked attributes
///
/// Serialized with the camelCase keys the web front end reads
/// (`fleetNumber`, `previousReg`, ...). Keys not modelled here are kept in
/// `extra` so rows written by other tools survive a load/save cycle.
/// Stored rows may hold non-string values (`"isonbustimes": true`); those
/// read as their JSON text and `null` reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FleetRecord {
    /// Fleet number painted on the vehicle (e.g. "101")
    #[serde(deserialize_with = "lenient_text")]
    pub fleet_number: String,
    /// Current registration mark
    #[serde(deserialize_with = "lenient_text")]
    pub reg: String,
    /// Registration the vehicle was originally intended to carry
    #[serde(deserialize_with = "lenient_text")]
    pub previous_reg: String,
    /// Chassis/body type (e.g. "Enviro400")
    #[serde(deserialize_with = "lenient_text")]
    pub vehicle_type: String,
    #[serde(deserialize_with = "lenient_text")]
    pub livery: String,
    #[serde(deserialize_with = "lenient_text")]
    pub operator: String,
    /// Link or flag for the vehicle's bustimes.org entry, empty until set
    #[serde(deserialize_with = "lenient_text")]
    pub isonbustimes: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FleetRecord {
    /// Keys an incoming fleet object must carry to be accepted
    pub const REQUIRED_FIELDS: [&'static str; 6] = [
        "fleetNumber",
        "reg",
        "previousReg",
        "vehicleType",
        "livery",
        "operator",
    ];

    /// Names of required keys absent from a raw JSON object
    pub fn missing_fields(raw: &Map<String, Value>) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !raw.contains_key(*field))
            .collect()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

impl std::fmt::Display for FleetRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) {} / {}",
            self.fleet_number, self.reg, self.vehicle_type, self.operator, self.livery
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_all_seven_keys() {
        let record = FleetRecord {
            fleet_number: "101".to_string(),
            reg: "SN64ABC".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 7);
        assert_eq!(obj["fleetNumber"], "101");
        assert_eq!(obj["reg"], "SN64ABC");
        assert_eq!(obj["previousReg"], "");
        assert_eq!(obj["isonbustimes"], "");
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let record: FleetRecord = serde_json::from_value(json!({ "reg": "YX12ABC" })).unwrap();
        assert_eq!(record.reg, "YX12ABC");
        assert_eq!(record.fleet_number, "");
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let raw = json!({
            "fleetNumber": "3001",
            "reg": "YJ19ABC",
            "previousReg": "",
            "vehicleType": "StreetDeck",
            "livery": "Red",
            "operator": "BusCo",
            "isonbustimes": "yes",
            "notes": "withdrawn"
        });
        let record: FleetRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.extra.get("notes"), Some(&json!("withdrawn")));
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_non_string_values_read_as_text() {
        let record: FleetRecord = serde_json::from_value(json!({
            "fleetNumber": 101,
            "reg": "SN64ABC",
            "previousReg": null,
            "isonbustimes": true
        }))
        .unwrap();
        assert_eq!(record.fleet_number, "101");
        assert_eq!(record.previous_reg, "");
        assert_eq!(record.isonbustimes, "true");
    }

    #[test]
    fn test_missing_fields() {
        let raw = json!({ "fleetNumber": "1", "reg": "A", "livery": "Red" });
        let missing = FleetRecord::missing_fields(raw.as_object().unwrap());
        assert_eq!(missing, vec!["previousReg", "vehicleType", "operator"]);
    }
}
