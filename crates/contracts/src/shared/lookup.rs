//! Option DTOs served by the `common/*` lookup endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything that can fill a `<select>`.
pub trait SelectOption {
    fn option_value(&self) -> String;
    fn option_label(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    pub id: i64,
    pub location_name: String,
    #[serde(default)]
    pub district_id: Option<i64>,
}

/// Persons, brands and distributors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOption {
    pub id: i64,
    pub name: String,
}

/// Design types, colors and finishings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledOption {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub short: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaOption {
    pub id: i64,
    pub area_name: String,
}

/// `{ "key": "Label", ... }` maps: designations, area types, shift types,
/// inactive reasons, door parts.
pub type KeyedOptions = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsByDistrictsRequest {
    pub district_ids: Vec<i64>,
}

pub mod endpoints {
    pub const STATES: &str = "common/get-states";
    pub const STATES_FROM_LOCATION: &str = "common/get-states-from-location";
    pub const LOCATIONS_BY_DISTRICTS: &str = "common/get-locations-by-districts";
    pub const AREA_TYPES: &str = "common/get-area-types";
    pub const DESIGNATIONS: &str = "common/get-designations";
    pub const EMPLOYEE_INACTIVE_REASONS: &str = "common/get-employee-inactive-reasons";
    pub const DESIGN_TYPES: &str = "common/get-design-types";
    pub const COLORS: &str = "common/get-colors";
    pub const FINISHING: &str = "common/get-finishing";
    pub const BRANDS: &str = "common/get-brands";
    pub const SALES_EXECUTIVES: &str = "common/get-sales-executives";
    pub const DISTRIBUTORS: &str = "common/get-distributors";
    pub const SHIFT_TYPES: &str = "common/get-shift-types";
    pub const DOOR_PARTS: &str = "common/get-door-parts";

    pub fn districts(state_id: i64) -> String {
        format!("common/get-districts/{}", state_id)
    }

    pub fn districts_from_location(state_id: i64) -> String {
        format!("common/get-districts-from-location/{}", state_id)
    }

    pub fn areas(assign_type: &str) -> String {
        format!("common/get-areas/{}", assign_type)
    }
}

impl SelectOption for StateOption {
    fn option_value(&self) -> String {
        self.id.to_string()
    }
    fn option_label(&self) -> String {
        self.name.clone()
    }
}

impl SelectOption for DistrictOption {
    fn option_value(&self) -> String {
        self.id.to_string()
    }
    fn option_label(&self) -> String {
        self.name.clone()
    }
}

impl SelectOption for LocationOption {
    fn option_value(&self) -> String {
        self.id.to_string()
    }
    fn option_label(&self) -> String {
        self.location_name.clone()
    }
}

impl SelectOption for NamedOption {
    fn option_value(&self) -> String {
        self.id.to_string()
    }
    fn option_label(&self) -> String {
        self.name.clone()
    }
}

impl SelectOption for TitledOption {
    fn option_value(&self) -> String {
        self.id.to_string()
    }
    fn option_label(&self) -> String {
        match self.short.as_deref().filter(|s| !s.is_empty()) {
            Some(short) => format!("{} ({})", self.title, short),
            None => self.title.clone(),
        }
    }
}

impl SelectOption for AreaOption {
    fn option_value(&self) -> String {
        self.id.to_string()
    }
    fn option_label(&self) -> String {
        self.area_name.clone()
    }
}

/// `(value, label)` pairs for a select, in server order.
pub fn to_pairs<T: SelectOption>(options: &[T]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|o| (o.option_value(), o.option_label()))
        .collect()
}

pub fn keyed_pairs(options: &KeyedOptions) -> Vec<(String, String)> {
    options
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keyed_options_decode_from_object() {
        let parsed: KeyedOptions =
            serde_json::from_value(json!({ "retired": "Retired", "absconded": "Absconded" }))
                .unwrap();
        assert_eq!(
            keyed_pairs(&parsed),
            vec![
                ("absconded".to_string(), "Absconded".to_string()),
                ("retired".to_string(), "Retired".to_string())
            ]
        );
    }

    #[test]
    fn test_titled_label_includes_short_code() {
        let with_short = TitledOption {
            id: 1,
            title: "Walnut".into(),
            short: Some("WN".into()),
        };
        let without = TitledOption {
            id: 2,
            title: "Teak".into(),
            short: Some(String::new()),
        };
        assert_eq!(
            to_pairs(&[with_short, without]),
            vec![
                ("1".to_string(), "Walnut (WN)".to_string()),
                ("2".to_string(), "Teak".to_string())
            ]
        );
    }

    #[test]
    fn test_endpoint_builders() {
        assert_eq!(endpoints::districts(4), "common/get-districts/4");
        assert_eq!(
            endpoints::districts_from_location(9),
            "common/get-districts-from-location/9"
        );
        assert_eq!(endpoints::areas("distributor"), "common/get-areas/distributor");
    }
}
