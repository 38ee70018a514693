use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::validation::{FieldErrors, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MasterResource for Brand {
    type Form = BrandForm;

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
        "a011"
    }

    fn collection_name() -> &'static str {
        "brand"
    }

    fn resource_path() -> &'static str {
        "brand"
    }

    fn element_name() -> &'static str {
        "Brand"
    }

    fn list_name() -> &'static str {
        "Brands"
    }
}

const NAME: ValidationRules = ValidationRules::required("Please Enter Brand Name");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandForm {
    pub name: String,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for BrandForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: true,
        }
    }
}

impl MasterForm for BrandForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("name", NAME.validate_string(&self.name));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let form = BrandForm {
            name: "   ".into(),
            status: true,
        };
        assert_eq!(form.validate().get("name"), Some("Please Enter Brand Name"));
    }

    #[test]
    fn test_new_brand_starts_active() {
        assert!(BrandForm::default().status);
    }
}
