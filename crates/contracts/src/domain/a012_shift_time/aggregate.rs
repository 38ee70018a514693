use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

/// Working shift of the factory floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTime {
    pub id: i64,
    pub title: String,
    #[serde(default, rename = "type")]
    pub shift_type: Option<String>,
    #[serde(default)]
    pub type_label: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ShiftTime {
    /// "09:00 - 17:30"
    pub fn span(&self) -> String {
        format!(
            "{} - {}",
            short_time(self.start_time.as_deref().unwrap_or("")),
            short_time(self.end_time.as_deref().unwrap_or(""))
        )
    }
}

/// Drops the seconds part of "HH:MM:SS".
pub fn short_time(value: &str) -> &str {
    match value.match_indices(':').nth(1) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

impl MasterResource for ShiftTime {
    type Form = ShiftTimeForm;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "shift_time"
    }

    fn resource_path() -> &'static str {
        "shift-time"
    }

    fn element_name() -> &'static str {
        "Shift Time"
    }

    fn list_name() -> &'static str {
        "Shift Times"
    }
}

// ============================================================================
// Form
// ============================================================================

const TITLE: ValidationRules = ValidationRules::required("Please Enter Title");
const SHIFT_TYPE: ValidationRules = ValidationRules::required("Please choose type");
const START: ValidationRules = ValidationRules::required("Please Enter a Start Time");
const END: ValidationRules = ValidationRules::required("Please Enter an End Time");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftTimeForm {
    pub title: String,
    #[serde(rename = "type")]
    pub shift_type: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for ShiftTimeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            shift_type: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            status: true,
        }
    }
}

impl MasterForm for ShiftTimeForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("title", TITLE.validate_string(&self.title));
        errors.check("type", SHIFT_TYPE.validate_string(&self.shift_type));
        errors.check("start_time", START.validate_string(&self.start_time));
        errors.check("end_time", END.validate_string(&self.end_time));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_fields_required() {
        let errors = ShiftTimeForm::default().validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("type"), Some("Please choose type"));
        assert_eq!(errors.get("end_time"), Some("Please Enter an End Time"));
    }

    #[test]
    fn test_span_trims_seconds() {
        let shift: ShiftTime = serde_json::from_value(json!({
            "id": 1, "title": "Morning", "type": "general",
            "start_time": "09:00:00", "end_time": "17:30"
        }))
        .unwrap();
        assert_eq!(shift.span(), "09:00 - 17:30");
    }
}
