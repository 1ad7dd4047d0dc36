//! Date Formatter — best-effort normalization of stored date strings.
//!
//! Never fails: a value that cannot be parsed is handed back unchanged so a
//! cosmetic date glitch cannot abort an export.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Formats a nullable date string as `YYYY-MM-DD`.
///
/// `None` and `""` yield `None`; unparseable input is returned as-is.
pub fn format_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;
    match parse_date(raw) {
        Some(date) => Some(date.format("%Y-%m-%d").to_string()),
        None => Some(raw.to_string()),
    }
}

/// Sort key for descending-date ordering. Absent or unparseable dates sort as the
/// epoch (`NaiveDate::default()` is 1970-01-01).
pub fn sort_key(raw: Option<&str>) -> NaiveDate {
    raw.and_then(parse_date).unwrap_or_default()
}

/// Like `sort_key`, but an absent or unparseable `primary` falls back to `fallback`.
pub fn sort_key_or(primary: Option<&str>, fallback: Option<&str>) -> NaiveDate {
    primary
        .and_then(parse_date)
        .or_else(|| fallback.and_then(parse_date))
        .unwrap_or_default()
}

/// Parses the date shapes the store and older clients produce.
/// Offset-carrying timestamps are converted to UTC before the date is taken.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // Year-month and bare year resolve to the first day of the period.
    match s.len() {
        7 => NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok(),
        4 if s.chars().all(|c| c.is_ascii_digit()) => {
            s.parse::<i32>().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        }
        _ => None,
    }
}
