//! Lenient decoding of foreign-key ids. Edit endpoints return them as numbers,
//! numeric strings, empty strings or null.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    fn into_id(self) -> Option<i64> {
        match self {
            RawId::Int(n) => Some(n),
            RawId::Text(s) => s.trim().parse().ok(),
        }
    }
}

pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.and_then(RawId::into_id))
}

pub fn id_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawId>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.into_iter().filter_map(RawId::into_id).collect())
}

/// Parse the value of a `<select>`; the placeholder option is `""`.
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

pub fn id_to_value(id: Option<i64>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "opt_id")]
        state_id: Option<i64>,
        #[serde(default, deserialize_with = "id_list")]
        district_ids: Vec<i64>,
    }

    #[test]
    fn test_opt_id_shapes() {
        let f: Form = serde_json::from_value(json!({ "state_id": "12" })).unwrap();
        assert_eq!(f.state_id, Some(12));
        let f: Form = serde_json::from_value(json!({ "state_id": "" })).unwrap();
        assert_eq!(f.state_id, None);
        let f: Form = serde_json::from_value(json!({ "state_id": null })).unwrap();
        assert_eq!(f.state_id, None);
        let f: Form = serde_json::from_value(json!({})).unwrap();
        assert_eq!(f.state_id, None);
    }

    #[test]
    fn test_id_list_mixed_values() {
        let f: Form =
            serde_json::from_value(json!({ "district_ids": [1, "2", "x", 3] })).unwrap();
        assert_eq!(f.district_ids, vec![1, 2, 3]);
        let f: Form = serde_json::from_value(json!({ "district_ids": null })).unwrap();
        assert!(f.district_ids.is_empty());
    }

    #[test]
    fn test_select_value_round() {
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(id_to_value(Some(7)), "7");
        assert_eq!(id_to_value(None), "");
    }
}
