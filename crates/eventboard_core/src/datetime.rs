//! Display formatting for the ISO-like `startTime` / `endTime` strings the gateway stores.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse `2024-01-01T10:00`, with optional seconds, an RFC 3339 offset, or a bare date.
/// Offsets are dropped: the wall-clock time as entered is what gets shown.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `2024-01-01T10:00` -> `January 1, 2024 at 10:00 AM`. Unparsable input comes back unchanged.
pub fn format_date_time(s: &str) -> String {
    match parse_timestamp(s) {
        Some(dt) => dt.format("%B %-d, %Y at %-I:%M %p").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minute_precision_input() {
        assert_eq!(format_date_time("2024-01-01T10:00"), "January 1, 2024 at 10:00 AM");
        assert_eq!(format_date_time("2023-12-24T18:30:00"), "December 24, 2023 at 6:30 PM");
    }

    #[test]
    fn keeps_wall_clock_of_offset_timestamps() {
        assert_eq!(
            format_date_time("2023-03-10T14:00:00.000+02:00"),
            "March 10, 2023 at 2:00 PM"
        );
        assert_eq!(format_date_time("2023-03-10T00:05:00Z"), "March 10, 2023 at 12:05 AM");
    }

    #[test]
    fn bare_date_is_midnight() {
        assert_eq!(
            parse_timestamp("2024-02-29"),
            NaiveDate::from_ymd_opt(2024, 2, 29).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn garbage_is_returned_verbatim() {
        assert_eq!(format_date_time("next friday"), "next friday");
        assert_eq!(format_date_time(""), "");
        assert_eq!(parse_timestamp("   "), None);
    }
}
