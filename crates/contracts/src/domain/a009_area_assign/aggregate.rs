use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::ids::opt_id;
use crate::shared::lookup::endpoints;
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Assign type
// ============================================================================

/// Who an area is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignType {
    #[default]
    SalesExecutive,
    Distributor,
}

impl AssignType {
    pub const ALL: [AssignType; 2] = [AssignType::SalesExecutive, AssignType::Distributor];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignType::SalesExecutive => "sales_executive",
            AssignType::Distributor => "distributor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssignType::SalesExecutive => "Sales Executive",
            AssignType::Distributor => "Distributor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// Lookup that lists the people of this type
    pub fn persons_endpoint(&self) -> &'static str {
        match self {
            AssignType::SalesExecutive => endpoints::SALES_EXECUTIVES,
            AssignType::Distributor => endpoints::DISTRIBUTORS,
        }
    }

    pub fn areas_endpoint(&self) -> String {
        endpoints::areas(self.as_str())
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRef {
    #[serde(default)]
    pub area_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaAssign {
    pub id: i64,
    #[serde(default)]
    pub assign_type: Option<String>,
    #[serde(default)]
    pub person_type_label: Option<String>,
    #[serde(default)]
    pub person: Option<PersonRef>,
    #[serde(default)]
    pub area: Option<AreaRef>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AreaAssign {
    pub fn person_name(&self) -> &str {
        self.person.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    pub fn area_name(&self) -> &str {
        self.area.as_ref().map(|a| a.area_name.as_str()).unwrap_or("")
    }

    /// Server label, or the label of the raw type when the label is missing
    pub fn type_label(&self) -> String {
        self.person_type_label
            .clone()
            .filter(|l| !l.is_empty())
            .or_else(|| {
                self.assign_type
                    .as_deref()
                    .and_then(AssignType::parse)
                    .map(|t| t.label().to_string())
            })
            .unwrap_or_default()
    }
}

impl MasterResource for AreaAssign {
    type Form = AreaAssignForm;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> String {
        format!("{} · {}", self.person_name(), self.area_name())
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "area_assign"
    }

    fn resource_path() -> &'static str {
        "area-assign"
    }

    fn element_name() -> &'static str {
        "Area Assign"
    }

    fn list_name() -> &'static str {
        "Area Assigns"
    }
}

/// List filter parameter
pub const FILTER_ASSIGN_TYPE: &str = "assign_type";

// ============================================================================
// Form
// ============================================================================

const PERSON: ValidationRules = ValidationRules::required("Please select a Person");
const AREA: ValidationRules = ValidationRules::required("Please choose an area");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaAssignForm {
    pub assign_type: AssignType,
    #[serde(deserialize_with = "opt_id")]
    pub person_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub area_id: Option<i64>,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for AreaAssignForm {
    fn default() -> Self {
        Self {
            assign_type: AssignType::default(),
            person_id: None,
            area_id: None,
            status: true,
        }
    }
}

impl AreaAssignForm {
    /// Switching the type invalidates the chosen person and area.
    /// Returns true when the area options must be reloaded.
    pub fn select_assign_type(&mut self, assign_type: AssignType) -> bool {
        if self.assign_type == assign_type {
            return false;
        }
        self.assign_type = assign_type;
        self.person_id = None;
        self.area_id = None;
        true
    }

    /// Person and area options fetched for `assign_type` are stale once the
    /// type was switched again.
    pub fn wants_options_for(&self, assign_type: AssignType) -> bool {
        self.assign_type == assign_type
    }
}

impl MasterForm for AreaAssignForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("person_id", PERSON.validate_option(self.person_id.as_ref()));
        errors.check("area_id", AREA.validate_option(self.area_id.as_ref()));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_switching_type_clears_person_and_area() {
        let mut form = AreaAssignForm {
            assign_type: AssignType::SalesExecutive,
            person_id: Some(5),
            area_id: Some(7),
            status: true,
        };
        assert!(form.select_assign_type(AssignType::Distributor));
        assert_eq!(form.person_id, None);
        assert_eq!(form.area_id, None);
        assert!(!form.select_assign_type(AssignType::Distributor));
    }

    #[test]
    fn test_options_of_previous_type_are_unwanted() {
        let mut form = AreaAssignForm::default();
        form.select_assign_type(AssignType::Distributor);
        assert!(!form.wants_options_for(AssignType::SalesExecutive));
        assert!(form.wants_options_for(AssignType::Distributor));
    }

    #[test]
    fn test_edit_payload_keeps_loaded_type() {
        let form: AreaAssignForm = serde_json::from_value(json!({
            "id": 2, "assign_type": "distributor", "person_id": 4, "area_id": "9", "status": 1
        }))
        .unwrap();
        assert_eq!(form.assign_type, AssignType::Distributor);
        assert_eq!(form.area_id, Some(9));
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_endpoints_follow_type() {
        assert_eq!(AssignType::Distributor.persons_endpoint(), "common/get-distributors");
        assert_eq!(
            AssignType::SalesExecutive.areas_endpoint(),
            "common/get-areas/sales_executive"
        );
        assert_eq!(AssignType::parse("distributor"), Some(AssignType::Distributor));
        assert_eq!(AssignType::parse("admin"), None);
    }

    #[test]
    fn test_type_label_fallback() {
        let row: AreaAssign = serde_json::from_value(json!({
            "id": 1, "assign_type": "sales_executive", "person": { "name": "Ravi" }
        }))
        .unwrap();
        assert_eq!(row.type_label(), "Sales Executive");
        assert_eq!(row.person_name(), "Ravi");
        assert_eq!(row.area_name(), "");
    }
}
