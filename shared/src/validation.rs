//! Input validation and date helpers
//!
//! Free functions shared by the service layer and its tests. Everything
//! here is pure: callers decide whether a `None` means "reject the
//! request" (required fields) or "ignore the parameter" (log filters).

use chrono::{DateTime, NaiveDate};

/// Render a calendar date the way the API reports it, e.g.
/// `"Sun Jan 15 2023"`.
pub fn format_log_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Trim surrounding whitespace and reject the result if nothing is left.
pub fn trimmed_non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a calendar date from client input.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, in which case the date
/// part is taken as written so the time of day never shifts the calendar
/// day.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Lenient limit parsing: a non-negative integer, or `None` for anything
/// else (including negatives). Callers treat `None` as "no limit".
pub fn parse_limit(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
