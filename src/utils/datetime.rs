//! Date and time utility functions
//!
//! The API reports task timestamps as RFC 3339 strings; this module turns
//! them into the local, human-oriented form the detail overlay shows.

use chrono::{DateTime, Local, TimeZone};

/// Standard date format used throughout the application
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an API timestamp for display using the configured date and time
/// formats.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`) and the common naive variants;
/// anything unparsable is returned verbatim rather than erased.
pub fn format_timestamp(raw: &str, date_format: &str, time_format: &str) -> String {
    let parsed = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        Some(dt.with_timezone(&Local))
    } else if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, &format!("{DATE_FORMAT}T%H:%M:%S")) {
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, &format!("{DATE_FORMAT} %H:%M:%S")) {
        Some(
            Local
                .from_local_datetime(&dt)
                .single()
                .unwrap_or_else(|| Local.from_utc_datetime(&dt)),
        )
    } else {
        None
    };

    match parsed {
        Some(local_dt) => format!(
            "{} {}",
            local_dt.format(date_format),
            local_dt.format(time_format)
        ),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_is_formatted() {
        let out = format_timestamp("2024-01-01T00:00:00Z", "%Y-%m-%d", "%H:%M");
        // Local offset varies; the output must be a date plus a time, not the raw string.
        assert_ne!(out, "2024-01-01T00:00:00Z");
        assert!(out.contains(' '));
    }

    #[test]
    fn test_unparsable_input_is_returned_verbatim() {
        assert_eq!(format_timestamp("not a date", "%Y-%m-%d", "%H:%M"), "not a date");
        assert_eq!(format_timestamp("", "%Y-%m-%d", "%H:%M"), "");
    }
}
