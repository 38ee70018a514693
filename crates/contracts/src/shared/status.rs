//! `status` arrives as `true`/`false`, `1`/`0` or `"1"`/`"0"` depending on the
//! endpoint; records and forms always hold a `bool`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Bool(bool),
    Int(i64),
    Text(String),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawStatus>::deserialize(deserializer)?;
    Ok(match raw {
        None => false,
        Some(RawStatus::Bool(b)) => b,
        Some(RawStatus::Int(n)) => n != 0,
        Some(RawStatus::Text(s)) => matches!(s.trim(), "1" | "true" | "active" | "Active"),
    })
}

pub fn label(active: bool) -> &'static str {
    if active {
        "Active"
    } else {
        "Inactive"
    }
}

/// Confirmation text for a status toggle.
pub fn change_prompt(element_name: &str, currently_active: bool) -> String {
    format!(
        "You are about to change the status of this {} to {}.",
        element_name.to_lowercase(),
        label(!currently_active)
    )
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "super::deserialize", default)]
        status: bool,
    }

    fn parse(value: serde_json::Value) -> bool {
        serde_json::from_value::<Row>(json!({ "status": value })).unwrap().status
    }

    #[test]
    fn test_accepts_all_wire_shapes() {
        assert!(parse(json!(true)));
        assert!(parse(json!(1)));
        assert!(parse(json!("1")));
        assert!(!parse(json!(false)));
        assert!(!parse(json!(0)));
        assert!(!parse(json!("0")));
        assert!(!parse(json!(null)));
    }

    #[test]
    fn test_missing_status_defaults_to_inactive() {
        let row: Row = serde_json::from_value(json!({})).unwrap();
        assert!(!row.status);
    }

    #[test]
    fn test_change_prompt() {
        assert_eq!(
            super::change_prompt("Employee", true),
            "You are about to change the status of this employee to Inactive."
        );
    }
}
