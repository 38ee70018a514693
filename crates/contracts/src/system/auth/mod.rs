use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldErrors, ValidationRules};

pub const LOGIN_PATH: &str = "login";
pub const LOGOUT_PATH: &str = "logout";

/// localStorage keys of the persisted session
pub const TOKEN_STORAGE_KEY: &str = "auth_token";
pub const USER_STORAGE_KEY: &str = "auth_user";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

const EMAIL: ValidationRules =
    ValidationRules::required("Please enter Email.").and_email("Please enter a valid Email.");
const PASSWORD: ValidationRules = ValidationRules::required("Please enter Password.");

impl LoginRequest {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check("email", EMAIL.validate_string(&self.email));
        errors.check("password", PASSWORD.validate_string(&self.password));
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserData {
    /// Name for the header, falling back to the email
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_shape() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "1|abc",
            "user": { "name": "Admin", "email": "admin@doors.in", "id": 1 }
        }))
        .unwrap();
        assert_eq!(response.token, "1|abc");
        assert_eq!(response.user.display_name(), "Admin");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserData {
            name: " ".into(),
            email: "admin@doors.in".into(),
        };
        assert_eq!(user.display_name(), "admin@doors.in");
    }

    #[test]
    fn test_login_validation() {
        let errors = LoginRequest {
            email: "admin".into(),
            password: String::new(),
        }
        .validate();
        assert_eq!(errors.get("email"), Some("Please enter a valid Email."));
        assert_eq!(errors.get("password"), Some("Please enter Password."));
    }
}
