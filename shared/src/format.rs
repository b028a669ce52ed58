//! Display formatting for money and timestamps

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Currency label printed before every amount
pub const CURRENCY_LABEL: &str = "Rs.";

/// Placeholder for a missing timestamp
pub const NOT_AVAILABLE: &str = "N/A";

const DISPLAY_FORMAT: &str = "%b %d, %Y, %I:%M %p";

/// `Rs. 1234.50`
pub fn format_money(amount: f64) -> String {
    format!("{CURRENCY_LABEL} {amount:.2}")
}

/// Format an API timestamp in the local time zone
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

/// Format an API timestamp in the given time zone.
///
/// Missing or blank input renders `N/A`; input that is not a recognised
/// timestamp is shown unchanged.
pub fn format_timestamp_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_timestamp(raw) {
        Some(utc) => utc.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` read as UTC
fn parse_timestamp(raw: &str) -> Option<DateTime<chrono::Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.to_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
