use thiserror::Error;

use super::ErrorBody;
use crate::shared::validation::FieldErrors;

const DEFAULT_VALIDATION_MESSAGE: &str = "The given data was invalid.";
const DEFAULT_SERVER_MESSAGE: &str = "Server error";

/// Failure of a single REST call, as seen by the console.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("session expired, please sign in again")]
    Unauthorized,

    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    /// 2xx response that carried `success: false`.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Classify a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }

        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed.best_message();

        if !parsed.errors.is_empty() {
            return ApiError::Validation {
                message: message.unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string()),
                errors: FieldErrors::from_server(&parsed.errors),
            };
        }

        ApiError::Server {
            status,
            message: message.unwrap_or_else(|| DEFAULT_SERVER_MESSAGE.to_string()),
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text for a toast. Transport-level failures fall back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_ignores_body() {
        assert_eq!(
            ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn test_validation_keeps_first_message_per_field() {
        let body = r#"{
            "message": "The email has already been taken.",
            "errors": {
                "email": ["The email has already been taken.", "Second"],
                "phone_no": ["The phone no field is required."]
            }
        }"#;
        let err = ApiError::from_response(422, body);
        let fields = err.field_errors().expect("validation error");
        assert_eq!(fields.get("email"), Some("The email has already been taken."));
        assert_eq!(fields.get("phone_no"), Some("The phone no field is required."));
        assert_eq!(err.to_string(), "The email has already been taken.");
    }

    #[test]
    fn test_server_error_without_message_uses_default() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "Server error".to_string()
            }
        );
    }

    #[test]
    fn test_user_message_hides_transport_details() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Failed to load details"), "Failed to load details");

        let err = ApiError::Rejected("Duplicate design number".into());
        assert_eq!(err.user_message("ignored"), "Duplicate design number");
    }
}
