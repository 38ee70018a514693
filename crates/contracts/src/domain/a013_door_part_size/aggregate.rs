use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::validation::{FieldErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorPartSize {
    pub id: i64,
    pub size: String,
    /// Key into the `common/get-door-parts` map
    #[serde(default)]
    pub door_part_id: Option<serde_json::Value>,
    #[serde(default)]
    pub door_part_label: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl DoorPartSize {
    pub fn part_key(&self) -> String {
        match &self.door_part_id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}

impl MasterResource for DoorPartSize {
    type Form = DoorPartSizeForm;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> String {
        self.size.clone()
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a013"
    }

    fn collection_name() -> &'static str {
        "door_part_size"
    }

    fn resource_path() -> &'static str {
        "door-part-size"
    }

    fn element_name() -> &'static str {
        "Door Part Size"
    }

    fn list_name() -> &'static str {
        "Door Part Sizes"
    }
}

const SIZE: ValidationRules = ValidationRules::required("Please enter size");
const PART: ValidationRules = ValidationRules::required("Please choose a Part");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorPartSizeForm {
    pub size: String,
    #[serde(deserialize_with = "part_key")]
    pub door_part_id: String,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for DoorPartSizeForm {
    fn default() -> Self {
        Self {
            size: String::new(),
            door_part_id: String::new(),
            status: true,
        }
    }
}

fn part_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

impl MasterForm for DoorPartSizeForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("size", SIZE.validate_string(&self.size));
        errors.check("door_part_id", PART.validate_string(&self.door_part_id));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_part_key_accepted() {
        let form: DoorPartSizeForm =
            serde_json::from_value(json!({ "size": "2100x900", "door_part_id": 3 })).unwrap();
        assert_eq!(form.door_part_id, "3");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_part_required() {
        let form = DoorPartSizeForm {
            size: "32mm".into(),
            ..DoorPartSizeForm::default()
        };
        assert_eq!(form.validate().get("door_part_id"), Some("Please choose a Part"));
    }
}
