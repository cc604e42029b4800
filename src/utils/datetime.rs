/// Pure date/time utility functions
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Calendar date format used by the upstream source and in notifications,
/// e.g. "Aug 07, 2025"
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Get the current calendar date in the given timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Format a date in the display format
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parse a date in the display format
pub fn parse_display_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, DISPLAY_DATE_FORMAT).ok()
}
