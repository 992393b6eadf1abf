//! Formatter Utilities
//!
//! Pure helpers for number formatting and timestamp parsing/display. Records
//! keep their timestamps as the raw strings the backend sent (they are
//! searched as text); everything that needs a date parses on demand through
//! here.

use chrono::{DateTime, Local, NaiveDateTime};

/// Format an integer with thousands separators ("12,345").
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Integer-rounded average step count, 0 when there are no records.
pub fn average_steps(total_steps: u64, records_count: u64) -> u64 {
    if records_count == 0 {
        return 0;
    }
    (total_steps as f64 / records_count as f64).round() as u64
}

/// Parse a backend timestamp into local wall-clock time.
///
/// Accepts RFC 3339 (offset converted to local) and naive ISO 8601 with or
/// without fractional seconds. Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    None
}

/// Date-only projection for table rows and chart labels.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Time-only projection for table rows.
pub fn format_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Full timestamp projection for the activity feed.
pub fn format_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%m/%d/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Calendar-day key for the distribution chart's daily buckets.
pub fn day_key(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.format("%b %d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(12345), "12,345");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 12345 / 10 = 1234.5 rounds away from zero
        assert_eq!(average_steps(12345, 10), 1235);
        assert_eq!(average_steps(0, 0), 0);
        assert_eq!(average_steps(100, 0), 0);
        assert_eq!(average_steps(10, 3), 3);
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert!(parse_timestamp("2025-08-20T09:30:00").is_some());
        assert!(parse_timestamp("2025-08-20T09:30:00.123456").is_some());
        assert!(parse_timestamp("2025-08-20 09:30:00").is_some());
        assert!(parse_timestamp("2025-08-20T09:30:00Z").is_some());
        assert!(parse_timestamp("2025-08-20T09:30:00+02:00").is_some());
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_display_projections() {
        assert_eq!(format_date("2025-08-20T09:30:05"), "08/20/2025");
        assert_eq!(format_time("2025-08-20T09:30:05"), "09:30:05");
        assert_eq!(format_datetime("2025-08-20T09:30:05"), "08/20/2025 09:30:05");
    }

    #[test]
    fn test_unparseable_falls_back_to_raw() {
        assert_eq!(format_date("garbage"), "garbage");
        assert_eq!(format_time("garbage"), "garbage");
    }

    #[test]
    fn test_day_key() {
        assert_eq!(day_key("2025-08-20T09:30:05").as_deref(), Some("Aug 20, 2025"));
        assert_eq!(day_key("garbage"), None);
    }
}
