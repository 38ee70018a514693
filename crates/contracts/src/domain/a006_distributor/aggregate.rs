use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MasterResource for Distributor {
    type Form = DistributorForm;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "distributor"
    }

    fn resource_path() -> &'static str {
        "distributor"
    }

    fn element_name() -> &'static str {
        "Distributor"
    }

    fn list_name() -> &'static str {
        "Distributors"
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributorForm {
    pub name: String,
    pub phone_no: String,
    pub email: String,
    pub address: String,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for DistributorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone_no: String::new(),
            email: String::new(),
            address: String::new(),
            status: true,
        }
    }
}

impl MasterForm for DistributorForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME.validate_string(&self.name));
        errors.check("phone_no", PHONE.validate_string(&self.phone_no));
        errors.check("email", EMAIL.validate_string(&self.email));
        errors.check("address", ADDRESS.validate_string(&self.address));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let errors = DistributorForm::default().validate();
        assert_eq!(errors.get("name"), Some("Please enter Name."));
        assert_eq!(errors.get("phone_no"), Some("Please enter Phone Number."));
        assert_eq!(errors.get("email"), Some("Please enter Email."));
        assert_eq!(errors.get("address"), Some("Please enter Address."));
    }

    #[test]
    fn test_valid_distributor() {
        let form = DistributorForm {
            name: "Shree Doors".into(),
            phone_no: "02212345678".into(),
            email: "sales@shreedoors.com".into(),
            address: "Bhiwandi".into(),
            status: true,
        };
        assert!(form.validate().is_empty());
    }
}
