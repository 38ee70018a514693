use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ApiError;

/// Pagination block returned next to every list payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

impl Default for PaginationMeta {
    fn default() -> Self {
        Self {
            current_page: 1,
            per_page: 10,
            total: 0,
            last_page: 1,
        }
    }
}

/// `{ success, data: [...], meta }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PaginationMeta,
}

/// `{ data }` for a single record or a lookup collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse<T> {
    pub data: T,
}

/// `{ success, message }` returned by create, update and change-status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    /// Servers that omit `success` are treated as successful.
    pub fn is_success(&self) -> bool {
        self.success != Some(false)
    }

    pub fn into_result(self) -> Result<String, ApiError> {
        if self.is_success() {
            Ok(self.message)
        } else if self.message.trim().is_empty() {
            Err(ApiError::Rejected("Something went wrong".to_string()))
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    pub fn best_message(&self) -> Option<String> {
        self.message
            .as_ref()
            .or(self.error.as_ref())
            .filter(|m| !m.trim().is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_list_response_decodes_data_and_meta() {
        let body = json!({
            "success": true,
            "data": [{ "id": 1 }, { "id": 2 }],
            "meta": { "current_page": 2, "per_page": 10, "total": 12, "last_page": 2 }
        });
        let parsed: ListResponse<Row> = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.data, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(parsed.meta.current_page, 2);
        assert_eq!(parsed.meta.total, 12);
    }

    #[test]
    fn test_list_response_without_meta_uses_defaults() {
        let parsed: ListResponse<Row> =
            serde_json::from_value(json!({ "data": [] })).unwrap();
        assert_eq!(parsed.meta, PaginationMeta::default());
        assert_eq!(parsed.success, None);
    }

    #[test]
    fn test_message_response_success_flag() {
        let ok: MessageResponse =
            serde_json::from_value(json!({ "success": true, "message": "Saved" })).unwrap();
        assert_eq!(ok.into_result().unwrap(), "Saved");

        let implicit: MessageResponse =
            serde_json::from_value(json!({ "message": "Updated" })).unwrap();
        assert!(implicit.is_success());

        let rejected: MessageResponse =
            serde_json::from_value(json!({ "success": false, "message": "" })).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(ApiError::Rejected("Something went wrong".to_string()))
        );
    }

    #[test]
    fn test_error_body_prefers_message_over_error() {
        let body: ErrorBody =
            serde_json::from_value(json!({ "message": "Nope", "error": "Other" })).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("Nope"));

        let body: ErrorBody = serde_json::from_value(json!({ "error": "Other" })).unwrap();
        assert_eq!(body.best_message().as_deref(), Some("Other"));
    }
}
