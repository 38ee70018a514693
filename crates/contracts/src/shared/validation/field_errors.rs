use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field error messages of a form, keyed by the wire field name.
///
/// Only the first message for a field is kept, so client rules checked in
/// priority order and server responses with several messages per field both
/// surface one line under the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a Laravel-style `errors` object.
    pub fn from_server(errors: &BTreeMap<String, Vec<String>>) -> Self {
        let mut out = Self::new();
        for (field, messages) in errors {
            if let Some(first) = messages.iter().find(|m| !m.trim().is_empty()) {
                out.insert(field, first.clone());
            }
        }
        out
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record `result` under `field` if it is an error.
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(&field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Please enter Email.");
        errors.insert("email", "Please enter a valid Email.");
        assert_eq!(errors.get("email"), Some("Please enter Email."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_from_server_skips_blank_messages() {
        let mut raw = BTreeMap::new();
        raw.insert("gstin".to_string(), vec!["".to_string(), "Invalid GSTIN".to_string()]);
        raw.insert("name".to_string(), vec![]);
        let errors = FieldErrors::from_server(&raw);
        assert_eq!(errors.get("gstin"), Some("Invalid GSTIN"));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_merge_does_not_override_client_errors() {
        let mut client = FieldErrors::new();
        client.insert("title", "Please enter Title.");
        let mut server = FieldErrors::new();
        server.insert("title", "The title has already been taken.");
        server.insert("short", "The short has already been taken.");
        client.merge(server);
        assert_eq!(client.get("title"), Some("Please enter Title."));
        assert_eq!(client.get("short"), Some("The short has already been taken."));
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());
        let mut errors = FieldErrors::new();
        errors.check("name", Err("Please enter Name.".into()));
        errors.check("email", Ok(()));
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
    }
}
