use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::ids::id_list;
use crate::shared::lookup::DistrictOption;
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaLocation {
    pub id: i64,
    pub location_name: String,
}

/// Sales area: a named set of locations across one or more districts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub area_name: String,
    #[serde(default, rename = "type")]
    pub area_type: Option<String>,
    #[serde(default)]
    pub type_label: Option<String>,
    #[serde(default)]
    pub locations: Vec<AreaLocation>,
    #[serde(default)]
    pub districts: Vec<DistrictOption>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MasterResource for Area {
    type Form = AreaForm;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> String {
        self.area_name.clone()
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "area"
    }

    fn resource_path() -> &'static str {
        "area"
    }

    fn element_name() -> &'static str {
        "Area"
    }

    fn list_name() -> &'static str {
        "Areas"
    }
}

// ============================================================================
// Form
// ============================================================================

const AREA_NAME: ValidationRules = ValidationRules::required("Please enter an Area Name.");
const STATE: ValidationRules = ValidationRules::required("Please select a State.");
const DISTRICTS: ValidationRules =
    ValidationRules::min_items(1, "Please select at least one District.");
const LOCATIONS: ValidationRules =
    ValidationRules::min_items(1, "Please select at least one Location.");
const AREA_TYPE: ValidationRules = ValidationRules::required("Please select a Area Type.");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaForm {
    pub area_name: String,
    /// The edit payload sends the state as a one-element array
    #[serde(deserialize_with = "first_state_id")]
    pub state_id: Option<i64>,
    #[serde(deserialize_with = "id_list")]
    pub district_ids: Vec<i64>,
    #[serde(deserialize_with = "id_list")]
    pub location_ids: Vec<i64>,
    #[serde(rename = "type")]
    pub area_type: String,
    /// District id → "all locations of this district were added"
    pub is_all_location: BTreeMap<i64, bool>,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for AreaForm {
    fn default() -> Self {
        Self {
            area_name: String::new(),
            state_id: None,
            district_ids: Vec::new(),
            location_ids: Vec::new(),
            area_type: String::new(),
            is_all_location: BTreeMap::new(),
            status: true,
        }
    }
}

fn first_state_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
        List(Vec<serde_json::Value>),
    }

    fn from_value(v: &serde_json::Value) -> Option<i64> {
        match v {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        Some(Raw::List(items)) => items.first().and_then(from_value),
    }
    .filter(|id| *id != 0))
}

impl MasterForm for AreaForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("state_id", STATE.validate_option(self.state_id.as_ref()));
        errors.check("district_ids", DISTRICTS.validate_items(&self.district_ids));
        errors.check("location_ids", LOCATIONS.validate_items(&self.location_ids));
        errors.check("area_name", AREA_NAME.validate_string(&self.area_name));
        errors.check("type", AREA_TYPE.validate_string(&self.area_type));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edit_payload_takes_first_state() {
        let form: AreaForm = serde_json::from_value(json!({
            "id": 4,
            "area_name": "Pune West",
            "state_id": [21],
            "district_ids": [301, 302],
            "location_ids": ["9001"],
            "type": "urban",
            "status": 1
        }))
        .unwrap();
        assert_eq!(form.state_id, Some(21));
        assert_eq!(form.district_ids, vec![301, 302]);
        assert_eq!(form.location_ids, vec![9001]);
        assert_eq!(form.area_type, "urban");
        assert!(form.status);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_empty_state_list_and_zero_mean_unset() {
        let form: AreaForm = serde_json::from_value(json!({ "state_id": [] })).unwrap();
        assert_eq!(form.state_id, None);
        let form: AreaForm = serde_json::from_value(json!({ "state_id": 0 })).unwrap();
        assert_eq!(form.state_id, None);
    }

    #[test]
    fn test_is_all_location_serializes_with_string_keys() {
        let mut form = AreaForm::default();
        form.is_all_location.insert(301, true);
        form.is_all_location.insert(302, false);
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["is_all_location"], json!({ "301": true, "302": false }));
        assert_eq!(value["type"], json!(""));
    }

    #[test]
    fn test_multi_selects_need_one_item() {
        let errors = AreaForm::default().validate();
        assert_eq!(errors.get("district_ids"), Some("Please select at least one District."));
        assert_eq!(errors.get("location_ids"), Some("Please select at least one Location."));
        assert_eq!(errors.get("type"), Some("Please select a Area Type."));
    }
}
