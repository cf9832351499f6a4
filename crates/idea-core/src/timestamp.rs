//! Creation-date formatting for stored ideas.
//!
//! Dates are stored as local wall-clock text (`DD/MM/YYYY HH:MM`), not as
//! RFC 3339, so existing files stay readable by the people who edit them.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// `strftime` pattern of the stored `date` field.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Render a timestamp in the stored format.
#[must_use]
pub fn format_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(DATE_FORMAT).to_string()
}

/// The current local time in the stored format.
#[must_use]
pub fn now() -> String {
    format_date(&Local::now())
}

/// Parse a stored date back into a naive timestamp (no zone is recorded).
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT).ok()
}
