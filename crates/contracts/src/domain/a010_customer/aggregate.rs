use serde::{Deserialize, Serialize};

use crate::domain::a007_location::NameRef;
use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::ids::opt_id;
use crate::shared::validation::{FieldErrors, ValidationRules};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    #[serde(default)]
    pub location_name: String,
}

/// CRM customer (dealer or retail buyer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub brand: Option<NameRef>,
    #[serde(default)]
    pub state: Option<NameRef>,
    #[serde(default)]
    pub district: Option<NameRef>,
    #[serde(default)]
    pub location: Option<LocationRef>,
    #[serde(default)]
    pub created_by_type_label: Option<String>,
    #[serde(default)]
    pub inactive_reason_label: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Customer {
    /// "Location, District, State" with missing parts left out
    pub fn place(&self) -> String {
        let parts = [
            self.location.as_ref().map(|l| l.location_name.as_str()),
            self.district.as_ref().map(|d| d.name.as_str()),
            self.state.as_ref().map(|s| s.name.as_str()),
        ];
        parts
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn brand_name(&self) -> &str {
        self.brand.as_ref().map(|b| b.name.as_str()).unwrap_or("")
    }
}

impl MasterResource for Customer {
    type Form = CustomerForm;

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
        "a010"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn resource_path() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

// ============================================================================
// Form
// ============================================================================

const NAME: ValidationRules = ValidationRules::required("Please enter Name.");
const PHONE: ValidationRules = ValidationRules::required("Please enter Phone Number.");
const EMAIL: ValidationRules = ValidationRules::none().and_email("Please enter a valid Email.");
const GSTIN: ValidationRules =
    ValidationRules::none().and_exact_length(15, "Please enter valid GST Number.");
const BRAND: ValidationRules = ValidationRules::required("Please choose a brand.");
const STATE: ValidationRules = ValidationRules::required("Please choose a state.");
const DISTRICT: ValidationRules = ValidationRules::required("Please choose a district.");
const LOCATION: ValidationRules = ValidationRules::required("Please choose a location.");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub name: String,
    pub phone_no: String,
    pub email: String,
    pub gstin: String,
    #[serde(deserialize_with = "opt_id")]
    pub brand_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub state_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub district_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub location_id: Option<i64>,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone_no: String::new(),
            email: String::new(),
            gstin: String::new(),
            brand_id: None,
            state_id: None,
            district_id: None,
            location_id: None,
            status: true,
        }
    }
}

impl MasterForm for CustomerForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME.validate_string(&self.name));
        errors.check("phone_no", PHONE.validate_string(&self.phone_no));
        errors.check("email", EMAIL.validate_string(&self.email));
        errors.check("gstin", GSTIN.validate_string(&self.gstin));
        errors.check("brand_id", BRAND.validate_option(self.brand_id.as_ref()));
        errors.check("state_id", STATE.validate_option(self.state_id.as_ref()));
        errors.check("district_id", DISTRICT.validate_option(self.district_id.as_ref()));
        errors.check("location_id", LOCATION.validate_option(self.location_id.as_ref()));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> CustomerForm {
        CustomerForm {
            name: "Kiran Traders".into(),
            phone_no: "9822012345".into(),
            brand_id: Some(1),
            state_id: Some(21),
            district_id: Some(301),
            location_id: Some(9001),
            ..CustomerForm::default()
        }
    }

    #[test]
    fn test_email_and_gstin_are_optional() {
        assert!(valid().validate().is_empty());
    }

    #[test]
    fn test_gstin_must_be_fifteen_chars_when_given() {
        let mut form = valid();
        form.gstin = "27AAPFU0939".into();
        assert_eq!(form.validate().get("gstin"), Some("Please enter valid GST Number."));
        form.gstin = "27AAPFU0939F1ZV".into();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_email_checked_when_given() {
        let mut form = valid();
        form.email = "kiran.traders".into();
        assert_eq!(form.validate().get("email"), Some("Please enter a valid Email."));
    }

    #[test]
    fn test_place_joins_available_parts() {
        let customer: Customer = serde_json::from_value(json!({
            "id": 1,
            "name": "Kiran",
            "location": { "location_name": "Kothrud" },
            "state": { "name": "Maharashtra" }
        }))
        .unwrap();
        assert_eq!(customer.place(), "Kothrud, Maharashtra");
    }
}
