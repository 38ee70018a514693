//! Validation rules for form fields

/// Rules for a single field. Every rule carries the message shown under the
/// input when it fails, so forms keep their own wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: Option<&'static str>,
    pub email: Option<&'static str>,
    pub exact_length: Option<(usize, &'static str)>,
    pub min_items: Option<(usize, &'static str)>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: None,
            email: None,
            exact_length: None,
            min_items: None,
        }
    }

    pub const fn required(message: &'static str) -> Self {
        Self {
            required: Some(message),
            ..Self::none()
        }
    }

    pub const fn min_items(count: usize, message: &'static str) -> Self {
        Self {
            min_items: Some((count, message)),
            ..Self::none()
        }
    }

    pub const fn and_email(self, message: &'static str) -> Self {
        Self {
            email: Some(message),
            ..self
        }
    }

    pub const fn and_exact_length(self, length: usize, message: &'static str) -> Self {
        Self {
            exact_length: Some((length, message)),
            ..self
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required.is_some() || self.min_items.is_some()
    }

    /// Blank optional values pass; format rules only apply to non-blank input.
    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return match self.required {
                Some(message) => Err(message.to_string()),
                None => Ok(()),
            };
        }

        if let Some(message) = self.email {
            if !is_valid_email(trimmed) {
                return Err(message.to_string());
            }
        }

        if let Some((length, message)) = self.exact_length {
            if trimmed.chars().count() != length {
                return Err(message.to_string());
            }
        }

        Ok(())
    }

    /// For selects bound to an optional id.
    pub fn validate_option<T>(&self, value: Option<&T>) -> Result<(), String> {
        match (value, self.required) {
            (None, Some(message)) => Err(message.to_string()),
            _ => Ok(()),
        }
    }

    /// For multi-selects.
    pub fn validate_items<T>(&self, items: &[T]) -> Result<(), String> {
        if let Some((count, message)) = self.min_items {
            if items.len() < count {
                return Err(message.to_string());
            }
        }
        Ok(())
    }
}

/// Structural address check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && tld.len() >= 2
        && !domain.starts_with('.')
        && !domain.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: ValidationRules = ValidationRules::required("Please enter Name.");
    const EMAIL: ValidationRules =
        ValidationRules::required("Please enter Email.").and_email("Please enter a valid Email.");
    const GSTIN: ValidationRules =
        ValidationRules::none().and_exact_length(15, "Please enter valid GST Number.");

    #[test]
    fn test_required_trims_whitespace() {
        assert_eq!(NAME.validate_string("   "), Err("Please enter Name.".to_string()));
        assert!(NAME.validate_string(" Ravi ").is_ok());
    }

    #[test]
    fn test_email_rule_order() {
        assert_eq!(EMAIL.validate_string(""), Err("Please enter Email.".to_string()));
        assert_eq!(
            EMAIL.validate_string("ravi@"),
            Err("Please enter a valid Email.".to_string())
        );
        assert!(EMAIL.validate_string("ravi@doors.in").is_ok());
    }

    #[test]
    fn test_optional_exact_length() {
        assert!(GSTIN.validate_string("").is_ok());
        assert!(GSTIN.validate_string("27AAPFU0939F1ZV").is_ok());
        assert_eq!(
            GSTIN.validate_string("27AAPFU0939F1Z"),
            Err("Please enter valid GST Number.".to_string())
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a.b+c@mail.example.com"));
        assert!(!is_valid_email("a b@mail.com"));
        assert!(!is_valid_email("@mail.com"));
        assert!(!is_valid_email("a@mail"));
        assert!(!is_valid_email("a@mail.c"));
        assert!(!is_valid_email("a@@mail.com"));
        assert!(!is_valid_email("a@.mail.com"));
        assert!(!is_valid_email("a@mail..com"));
    }

    #[test]
    fn test_option_and_items() {
        let state = ValidationRules::required("Please select a State.");
        assert!(state.validate_option::<i64>(None).is_err());
        assert!(state.validate_option(Some(&4_i64)).is_ok());

        let districts = ValidationRules::min_items(1, "Please select at least one District.");
        assert!(districts.is_required());
        assert!(districts.validate_items::<i64>(&[]).is_err());
        assert!(districts.validate_items(&[3_i64]).is_ok());
    }
}
