use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::ids::opt_id;
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

/// Name reference embedded in list payloads (`state`, `district`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRef {
    #[serde(default)]
    pub name: String,
}

/// Town or locality inside a district
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub location_name: String,
    #[serde(default)]
    pub state: Option<NameRef>,
    #[serde(default)]
    pub district: Option<NameRef>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Location {
    pub fn state_name(&self) -> &str {
        self.state.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }

    pub fn district_name(&self) -> &str {
        self.district.as_ref().map(|d| d.name.as_str()).unwrap_or("")
    }
}

impl MasterResource for Location {
    type Form = LocationForm;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> String {
        self.location_name.clone()
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "location"
    }

    fn resource_path() -> &'static str {
        "location"
    }

    fn element_name() -> &'static str {
        "Location"
    }

    fn list_name() -> &'static str {
        "Locations"
    }
}

// ============================================================================
// Form
// ============================================================================

const NAME: ValidationRules = ValidationRules::required("Please enter Name");
const STATE: ValidationRules = ValidationRules::required("Please choose a State");
const DISTRICT: ValidationRules = ValidationRules::required("Please choose a District");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationForm {
    pub location_name: String,
    #[serde(deserialize_with = "opt_id")]
    pub state_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub district_id: Option<i64>,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for LocationForm {
    fn default() -> Self {
        Self {
            location_name: String::new(),
            state_id: None,
            district_id: None,
            status: true,
        }
    }
}

impl LocationForm {
    /// Pick a state. The district belongs to the old state and is cleared.
    /// Returns the state whose districts must be fetched.
    pub fn select_state(&mut self, state_id: Option<i64>) -> Option<i64> {
        if self.state_id != state_id {
            self.district_id = None;
        }
        self.state_id = state_id;
        state_id
    }

    /// A district reply is only usable while its state is still selected.
    pub fn wants_districts_of(&self, state_id: i64) -> bool {
        self.state_id == Some(state_id)
    }
}

impl MasterForm for LocationForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("location_name", NAME.validate_string(&self.location_name));
        errors.check("state_id", STATE.validate_option(self.state_id.as_ref()));
        errors.check("district_id", DISTRICT.validate_option(self.district_id.as_ref()));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_change_clears_district() {
        let mut form = LocationForm {
            location_name: "Kothrud".into(),
            state_id: Some(1),
            district_id: Some(11),
            status: true,
        };
        assert_eq!(form.select_state(Some(2)), Some(2));
        assert_eq!(form.district_id, None);
        assert_eq!(form.validate().get("district_id"), Some("Please choose a District"));
    }

    #[test]
    fn test_reselecting_same_state_keeps_district() {
        let mut form = LocationForm {
            state_id: Some(1),
            district_id: Some(11),
            ..LocationForm::default()
        };
        form.select_state(Some(1));
        assert_eq!(form.district_id, Some(11));
    }

    #[test]
    fn test_districts_of_previous_state_are_unwanted() {
        let mut form = LocationForm::default();
        form.select_state(Some(1));
        form.select_state(Some(2));
        assert!(!form.wants_districts_of(1));
        assert!(form.wants_districts_of(2));
        form.select_state(None);
        assert!(!form.wants_districts_of(2));
    }
}
