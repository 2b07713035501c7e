//! User-submitted fleet change requests

use fleetbook_types::Error;
use serde::{Deserialize, Serialize};

const NOT_PROVIDED: &str = "N/A";

/// A visitor's request to correct a fleet record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeRequest {
    pub fleet_number: Option<String>,
    /// Registration currently shown for the vehicle
    pub reg: Option<String>,
    pub new_reg: Option<String>,
    pub new_livery: Option<String>,
    pub new_operator: Option<String>,
    pub new_vehicle_type: Option<String>,
    pub extra_notes: Option<String>,
}

impl ChangeRequest {
    /// Fleet number and current registration must both be non-empty
    pub fn validate(&self) -> Result<(), Error> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        if present(&self.fleet_number) && present(&self.reg) {
            Ok(())
        } else {
            Err(Error::MissingChangeFields)
        }
    }

    /// Chat message posted to the moderators' webhook
    pub fn to_message(&self) -> String {
        let field = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_PROVIDED.to_string());
        format!(
            "🚌 **Fleet Change Request** 🚌\n\
             **Fleet Number:** {}\n\
             **Current Reg:** {}\n\
             **New Reg:** {}\n\
             **New Livery:** {}\n\
             **New Operator:** {}\n\
             **New Vehicle Type:** {}\n\
             **Extra Notes:** {}",
            self.fleet_number.as_deref().unwrap_or_default(),
            self.reg.as_deref().unwrap_or_default(),
            field(&self.new_reg),
            field(&self.new_livery),
            field(&self.new_operator),
            field(&self.new_vehicle_type),
            field(&self.extra_notes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_requires_fleet_number_and_reg() {
        let request: ChangeRequest = serde_json::from_value(json!({ "fleetNumber": "101" })).unwrap();
        assert!(matches!(request.validate(), Err(Error::MissingChangeFields)));

        let request: ChangeRequest =
            serde_json::from_value(json!({ "fleetNumber": "101", "reg": "" })).unwrap();
        assert!(request.validate().is_err());

        let request: ChangeRequest =
            serde_json::from_value(json!({ "fleetNumber": "101", "reg": "SN64ABC" })).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_message_fills_absent_fields_with_na() {
        let request: ChangeRequest = serde_json::from_value(json!({
            "fleetNumber": "101",
            "reg": "SN64ABC",
            "newLivery": "Coastliner",
            "extraNotes": ""
        }))
        .unwrap();

        let message = request.to_message();
        let lines: Vec<_> = message.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "**Fleet Number:** 101");
        assert_eq!(lines[2], "**Current Reg:** SN64ABC");
        assert_eq!(lines[3], "**New Reg:** N/A");
        assert_eq!(lines[4], "**New Livery:** Coastliner");
        assert_eq!(lines[7], "**Extra Notes:** ");
    }
}
