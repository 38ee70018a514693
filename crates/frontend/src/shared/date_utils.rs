//! Indian-style (`dd/mm/yyyy`) rendering of the API's timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FMT: &str = "%d/%m/%Y";
const DATETIME_FMT: &str = "%d/%m/%Y %I:%M %p";

fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "2024-03-15T14:02:26.000000Z" -> "15/03/2024".
/// Unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format(DATE_FMT).to_string(),
        None => value.to_string(),
    }
}

/// "2024-03-15 14:02:26" -> "15/03/2024 02:02 PM"
pub fn format_datetime(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format(DATETIME_FMT).to_string(),
        None => value.to_string(),
    }
}

/// Date cell of a list row; missing dates render as "-".
pub fn date_cell(value: Option<&str>) -> String {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => format_date(v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.000000Z"), "15/03/2024");
        assert_eq!(format_date("2024-03-15 14:02:26"), "15/03/2024");
        assert_eq!(format_date("2024-12-01"), "01/12/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15 14:02:26"), "15/03/2024 02:02 PM");
        assert_eq!(format_datetime("2024-03-15T09:30:00Z"), "15/03/2024 09:30 AM");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(date_cell(None), "-");
        assert_eq!(date_cell(Some("  ")), "-");
    }
}
