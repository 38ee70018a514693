use serde::{Deserialize, Serialize};

use crate::domain::common::{MasterForm, MasterResource};
use crate::shared::ids::opt_id;
use crate::shared::validation::{FieldErrors, ImageMeta, ValidationRules, DESIGN_IMAGE};

// ============================================================================
// Record
// ============================================================================

/// Title of a related master as embedded in the design payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRef {
    #[serde(default)]
    pub title: String,
}

fn title_of(r: &Option<TitleRef>) -> &str {
    r.as_ref().map(|t| t.title.as_str()).unwrap_or("")
}

/// Door design: a numbered combination of type, colors and finishing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: i64,
    pub design_number: String,
    #[serde(default)]
    pub design_type: Option<TitleRef>,
    #[serde(default)]
    pub design_type_short: Option<String>,
    #[serde(default)]
    pub panel_color: Option<TitleRef>,
    #[serde(default)]
    pub a_section_color: Option<TitleRef>,
    #[serde(default)]
    pub frame_color: Option<TitleRef>,
    #[serde(default)]
    pub finishing: Option<TitleRef>,
    /// Absolute or API-relative URL of the uploaded picture
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Design {
    pub fn design_type_title(&self) -> &str {
        title_of(&self.design_type)
    }

    pub fn panel_color_title(&self) -> &str {
        title_of(&self.panel_color)
    }

    pub fn a_section_color_title(&self) -> &str {
        title_of(&self.a_section_color)
    }

    pub fn frame_color_title(&self) -> &str {
        title_of(&self.frame_color)
    }

    pub fn finishing_title(&self) -> &str {
        title_of(&self.finishing)
    }
}

impl MasterResource for Design {
    type Form = DesignForm;

    fn id(&self) -> i64 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.status
    }

    fn display_name(&self) -> String {
        self.design_number.clone()
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "design"
    }

    fn resource_path() -> &'static str {
        "design"
    }

    fn element_name() -> &'static str {
        "Design"
    }

    fn list_name() -> &'static str {
        "Designs"
    }
}

/// List filter parameter
pub const FILTER_DESIGN_TYPE: &str = "design_type_id";

// ============================================================================
// Form
// ============================================================================

const DESIGN_NUMBER: ValidationRules = ValidationRules::required("Please Enter Design Number.");
const DESIGN_TYPE: ValidationRules = ValidationRules::required("Please choose a Design Type.");
const COLOR: ValidationRules = ValidationRules::required("Please choose a Color.");
const FINISHING: ValidationRules = ValidationRules::required("Please choose a Finishing.");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignForm {
    pub design_number: String,
    #[serde(deserialize_with = "opt_id")]
    pub design_type_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub panel_color_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub a_section_color_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub frame_color_id: Option<i64>,
    #[serde(deserialize_with = "opt_id")]
    pub finishing_id: Option<i64>,
    /// URL of the stored image (edit mode); never sent back
    #[serde(skip_serializing)]
    pub image: Option<String>,
    /// Newly picked file; the bytes stay in the browser
    #[serde(skip)]
    pub new_image: Option<ImageMeta>,
    #[serde(deserialize_with = "crate::shared::status::deserialize")]
    pub status: bool,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self {
            design_number: String::new(),
            design_type_id: None,
            panel_color_id: None,
            a_section_color_id: None,
            frame_color_id: None,
            finishing_id: None,
            image: None,
            new_image: None,
            status: true,
        }
    }
}

impl DesignForm {
    /// Text parts of the multipart body; the file is appended as `image`.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let id = |v: Option<i64>| v.map(|x| x.to_string()).unwrap_or_default();
        vec![
            ("design_number", self.design_number.trim().to_string()),
            ("design_type_id", id(self.design_type_id)),
            ("panel_color_id", id(self.panel_color_id)),
            ("a_section_color_id", id(self.a_section_color_id)),
            ("frame_color_id", id(self.frame_color_id)),
            ("finishing_id", id(self.finishing_id)),
            ("status", if self.status { "1" } else { "0" }.to_string()),
        ]
    }
}

impl MasterForm for DesignForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("design_number", DESIGN_NUMBER.validate_string(&self.design_number));
        errors.check("design_type_id", DESIGN_TYPE.validate_option(self.design_type_id.as_ref()));
        errors.check("panel_color_id", COLOR.validate_option(self.panel_color_id.as_ref()));
        errors.check(
            "a_section_color_id",
            COLOR.validate_option(self.a_section_color_id.as_ref()),
        );
        errors.check("frame_color_id", COLOR.validate_option(self.frame_color_id.as_ref()));
        errors.check("finishing_id", FINISHING.validate_option(self.finishing_id.as_ref()));
        errors.check("image", DESIGN_IMAGE.validate(self.new_image.as_ref()));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> DesignForm {
        DesignForm {
            design_number: "D-101".into(),
            design_type_id: Some(1),
            panel_color_id: Some(2),
            a_section_color_id: Some(3),
            frame_color_id: Some(2),
            finishing_id: Some(4),
            ..DesignForm::default()
        }
    }

    #[test]
    fn test_every_select_is_required() {
        let errors = DesignForm::default().validate();
        for field in [
            "design_number",
            "design_type_id",
            "panel_color_id",
            "a_section_color_id",
            "frame_color_id",
            "finishing_id",
        ] {
            assert!(errors.get(field).is_some(), "{} should be required", field);
        }
        assert!(errors.get("image").is_none());
    }

    #[test]
    fn test_oversized_image_is_rejected() {
        let mut form = filled();
        form.new_image = Some(ImageMeta {
            name: "big.jpg".into(),
            mime: "image/jpeg".into(),
            size: 4 * 1024 * 1024,
        });
        let errors = form.validate();
        assert_eq!(errors.get("image"), Some("File size must be less than 3 MB"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_multipart_fields_encode_status_as_digit() {
        let mut form = filled();
        form.status = false;
        let fields = form.multipart_fields();
        assert!(fields.contains(&("status", "0".to_string())));
        assert!(fields.contains(&("finishing_id", "4".to_string())));
    }

    #[test]
    fn test_record_titles_from_nested_payload() {
        let design: Design = serde_json::from_value(json!({
            "id": 9,
            "design_number": "D-9",
            "design_type": { "title": "Flush" },
            "panel_color": { "title": "Walnut" },
            "status": 1
        }))
        .unwrap();
        assert_eq!(design.design_type_title(), "Flush");
        assert_eq!(design.panel_color_title(), "Walnut");
        assert_eq!(design.frame_color_title(), "");
        assert!(design.status);
    }

    #[test]
    fn test_edit_payload_keeps_image_url_out_of_json() {
        let form: DesignForm = serde_json::from_value(json!({
            "design_number": "D-9",
            "design_type_id": "1",
            "image": "uploads/d9.png",
            "status": true
        }))
        .unwrap();
        assert_eq!(form.design_type_id, Some(1));
        assert_eq!(form.image.as_deref(), Some("uploads/d9.png"));
        let back = serde_json::to_value(&form).unwrap();
        assert!(back.get("image").is_none());
    }
}
