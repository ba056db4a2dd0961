//! Time utilities: parsing upstream timestamps and dates, fractional hours,
//! clock formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.fZ",
];

/// Parse an ISO-8601 timestamp into the wall-clock time it names.
///
/// Offsets are honoured only to read the local wall clock of the record
/// (`2025-03-01T06:00:00-05:00` is 06:00), never to shift it.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse a log date (`YYYY-MM-DD`); a full timestamp yields its date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(s).map(|dt| dt.date()))
}

/// Hours since `midnight`, at minute resolution (seconds are dropped).
///
/// Anything at or after the following midnight is `24.0`.
pub fn hour_of_day(ts: NaiveDateTime, midnight: NaiveDateTime) -> f64 {
    if (ts - midnight).num_minutes() >= 24 * 60 {
        return 24.0;
    }
    ts.hour() as f64 + ts.minute() as f64 / 60.0
}

/// Format fractional hours as a clock value, `24.0` → `"24:00"`.
pub fn format_clock(hours: f64) -> String {
    let total = (hours * 60.0).round().clamp(0.0, 24.0 * 60.0) as i64;
    format_minutes(total)
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(date: &str) -> NaiveDateTime {
        parse_date(date).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn parses_offset_timestamps_as_wall_clock() {
        let ts = parse_timestamp("2025-03-01T06:15:00-05:00").unwrap();
        assert_eq!(ts.to_string(), "2025-03-01 06:15:00");

        let z = parse_timestamp("2025-03-01T23:00:00Z").unwrap();
        assert_eq!(z.hour(), 23);
    }

    #[test]
    fn parses_naive_variants() {
        assert!(parse_timestamp("2025-03-01T06:15").is_some());
        assert!(parse_timestamp("2025-03-01 06:15:30").is_some());
        assert!(parse_timestamp("2025-03-01T06:15:30.250").is_some());
        assert!(parse_timestamp("06:15").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn hour_of_day_discards_seconds() {
        let m = midnight("2025-03-01");
        let ts = parse_timestamp("2025-03-01T13:45:59").unwrap();
        assert_eq!(hour_of_day(ts, m), 13.75);
    }

    #[test]
    fn next_midnight_is_twenty_four() {
        let m = midnight("2025-03-01");
        let ts = parse_timestamp("2025-03-02T00:00:00").unwrap();
        assert_eq!(hour_of_day(ts, m), 24.0);
        assert_eq!(format_clock(24.0), "24:00");
        assert_eq!(format_clock(6.5), "06:30");
    }
}
