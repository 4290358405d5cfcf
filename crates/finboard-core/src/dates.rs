//! Date parsing and labelling helpers shared by the bill services.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::CoreError;

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a dataset date string into a UTC timestamp.
///
/// Accepts RFC 3339 (`2024-08-19T14:23:11Z`), ISO-8601 date-times with the
/// seconds omitted or a compact offset (`2024-08-19T14:23Z`,
/// `2024-08-19T14:23:11+0200`), offset-less date-times read as UTC
/// (`2024-08-19T14:23`) and a bare date read as midnight UTC (`2024-08-19`).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Like [`parse_timestamp`], but names the offending record on failure.
pub fn require_timestamp(record: &str, value: &str) -> Result<DateTime<Utc>, CoreError> {
    parse_timestamp(value).ok_or_else(|| CoreError::InvalidDate {
        record: record.to_string(),
        value: value.to_string(),
    })
}

/// English ordinal suffix for a day-of-month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Formats the schedule label shown next to a bill, e.g. `Monthly - 21st`.
pub fn monthly_due_label(day: u32) -> String {
    format!("Monthly - {}{}", day, ordinal_suffix(day))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first| (first - Duration::days(1)).day())
        .unwrap_or(28)
}

/// The date in `year`/`month` that carries `day`, clamped to the month's length.
pub fn clamped_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Year and month of the month following `date`.
pub fn next_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    }
}
