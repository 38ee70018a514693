use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

/// Staff member (sales executives are employees with that designation)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub designation_label: Option<String>,
    #[serde(default)]
    pub contract_type_label: Option<String>,
    #[serde(default)]
    pub inactive_reason_label: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MasterResource for Employee {
    type Form = EmployeeForm;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "employee"
    }

    fn resource_path() -> &'static str {
        "employee"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

// ============================================================================
// Form
// ============================================================================

const NAME: ValidationRules = ValidationRules::required("Please enter Name.");
const PHONE: ValidationRules = ValidationRules::required("Please enter Phone Number.");
const EMAIL: ValidationRules =
    ValidationRules::required("Please enter Email.").and_email("Please enter a valid Email.");
const ADDRESS: ValidationRules = ValidationRules::required("Please enter Address.");
const DESIGNATION: ValidationRules = ValidationRules::required("Please select a Designation.");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    pub name: String,
    pub phone_no: String,
    pub email: String,
    pub address: String,
    /// Key from `common/get-designations`
    pub designation: String,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone_no: String::new(),
            email: String::new(),
            address: String::new(),
            designation: String::new(),
            status: true,
        }
    }
}

impl MasterForm for EmployeeForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME.validate_string(&self.name));
        errors.check("phone_no", PHONE.validate_string(&self.phone_no));
        errors.check("email", EMAIL.validate_string(&self.email));
        errors.check("address", ADDRESS.validate_string(&self.address));
        errors.check("designation", DESIGNATION.validate_string(&self.designation));
        errors
    }
}

// ============================================================================
// Status change
// ============================================================================

/// Body of `PUT employee/change-status/{id}`.
///
/// Deactivation carries the reason key; activation sends `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStatusChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EmployeeStatusChange {
    pub fn activate() -> Self {
        Self { reason: None }
    }

    /// A blank reason is refused with the prompt's validation text.
    pub fn deactivate(reason: &str) -> Result<Self, String> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err("Please select a reason!".to_string());
        }
        Ok(Self {
            reason: Some(reason.to_string()),
        })
    }

    /// Whether toggling an employee in this state needs a reason first.
    pub fn needs_reason(currently_active: bool) -> bool {
        currently_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_is_required_and_checked() {
        let mut form = EmployeeForm {
            name: "Asha".into(),
            phone_no: "9876543210".into(),
            email: "asha@".into(),
            address: "Pune".into(),
            designation: "sales_executive".into(),
            status: true,
        };
        assert_eq!(form.validate().get("email"), Some("Please enter a valid Email."));
        form.email = "asha@doors.in".into();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_blank_form_lists_all_required_fields() {
        let errors = EmployeeForm::default().validate();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("designation"), Some("Please select a Designation."));
    }

    #[test]
    fn test_status_change_bodies() {
        assert_eq!(
            serde_json::to_value(EmployeeStatusChange::activate()).unwrap(),
            json!({})
        );
        assert_eq!(
            serde_json::to_value(EmployeeStatusChange::deactivate("resigned").unwrap()).unwrap(),
            json!({ "reason": "resigned" })
        );
        assert_eq!(
            EmployeeStatusChange::deactivate("  "),
            Err("Please select a reason!".to_string())
        );
        assert!(EmployeeStatusChange::needs_reason(true));
        assert!(!EmployeeStatusChange::needs_reason(false));
    }
}
