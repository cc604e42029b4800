/// Pure functions for notification message formatting
use chrono::NaiveDate;

use crate::constants::EVENT_TIME_LABEL;
use crate::models::EconomicEvent;
use crate::utils::datetime::format_display_date;

/// Build the daily notification text.
///
/// Holiday runs short-circuit to a fixed sentence; the event list is never
/// consulted on that branch.
pub fn build_notification_message(
    is_holiday: bool,
    events: &[EconomicEvent],
    target_date: NaiveDate,
) -> String {
    if is_holiday {
        return holiday_notice();
    }

    let date_str = format_display_date(target_date);
    if events.is_empty() {
        build_no_events_message(&date_str)
    } else {
        build_events_message(&date_str, events)
    }
}

/// Fixed notice sent on bank holidays
pub fn holiday_notice() -> String {
    "It’s a bank holiday today.".to_string()
}

fn build_no_events_message(date_str: &str) -> String {
    format!("No high-impact US economic events for {}.", date_str)
}

fn build_events_message(date_str: &str, events: &[EconomicEvent]) -> String {
    let mut message = format!("**High-Impact US Economic Events for {}:**\n", date_str);
    for event in events {
        message.push_str(&format_event_line(event));
    }
    message
}

/// One bullet line per event, newline-terminated
fn format_event_line(event: &EconomicEvent) -> String {
    format!("- {} {}: {}\n", event.time, EVENT_TIME_LABEL, event.name)
}
