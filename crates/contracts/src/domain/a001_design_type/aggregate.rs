use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

/// Door design type (for example "Flush", "Moulded")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignType {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub short: String,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MasterResource for DesignType {
    type Form = DesignTypeForm;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "design_type"
    }

    fn resource_path() -> &'static str {
        "design-type"
    }

    fn element_name() -> &'static str {
        "Design Type"
    }

    fn list_name() -> &'static str {
        "Design Types"
    }
}

// ============================================================================
// Form
// ============================================================================

const TITLE: ValidationRules = ValidationRules::required("Please enter Title.");
const SHORT: ValidationRules = ValidationRules::required("Please enter Short Name.");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTypeForm {
    pub title: String,
    pub short: String,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for DesignTypeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            short: String::new(),
            status: true,
        }
    }
}

impl MasterForm for DesignTypeForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("title", TITLE.validate_string(&self.title));
        errors.check("short", SHORT.validate_string(&self.short));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_form_is_active_and_invalid() {
        let form = DesignTypeForm::default();
        assert!(form.status);
        let errors = form.validate();
        assert_eq!(errors.get("title"), Some("Please enter Title."));
        assert_eq!(errors.get("short"), Some("Please enter Short Name."));
    }

    #[test]
    fn test_edit_payload_with_numeric_status() {
        let form: DesignTypeForm = serde_json::from_value(json!({
            "id": 3, "title": "Flush", "short": "FL", "status": 0
        }))
        .unwrap();
        assert!(!form.status);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_paths() {
        assert_eq!(DesignType::full_name(), "a001_design_type");
        assert_eq!(DesignType::status_path(5), "design-type/change-status/5");
        assert_eq!(DesignType::edit_path(5), "design-type/5/edit");
    }
}
