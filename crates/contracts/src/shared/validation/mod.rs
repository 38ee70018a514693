//! Client-side form validation and server error mapping.

pub mod field_errors;
pub mod image;
pub mod rules;

pub use field_errors::FieldErrors;
pub use image::{ImageMeta, ImageRule, DESIGN_IMAGE};
pub use rules::{is_valid_email, ValidationRules};
