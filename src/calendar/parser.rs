//! Extraction of qualifying event rows from the calendar page markup.

use chrono::NaiveDate;

use crate::constants::DOMESTIC_CURRENCY;
use crate::models::EconomicEvent;
use crate::utils::datetime::parse_display_date;
use crate::utils::html::{has_class, next_tag_block, opening_tag, text_content};

const TABLE_CLASS: &str = "calendar__table";
const EVENT_ROW_CLASS: &str = "calendar__row--event";
const DATE_CELL_CLASS: &str = "calendar__cell--date";
const CURRENCY_CELL_CLASS: &str = "calendar__cell--currency";
const IMPACT_CELL_CLASS: &str = "calendar__cell--impact";
const HIGH_IMPACT_CLASS: &str = "impact--high";
const TIME_CELL_CLASS: &str = "calendar__cell--time";
const EVENT_CELL_CLASS: &str = "calendar__cell--event";

/// Extract the events for `target_date` from the page markup, in document
/// order.
///
/// Returns `None` when the calendar table is absent. Rows that are
/// malformed or fail the date/currency/impact filters are skipped, never
/// an error.
pub fn extract_events(html: &str, target_date: NaiveDate) -> Option<Vec<EconomicEvent>> {
    let table = find_calendar_table(html)?;

    let mut events = Vec::new();
    let mut pos = 0usize;
    while let Some((row_start, row_end)) = next_tag_block(table, "<tr", "</tr>", pos) {
        let row = &table[row_start..row_end];
        pos = row_end;

        if !has_class(opening_tag(row), EVENT_ROW_CLASS) {
            continue;
        }
        if let Some(event) = parse_event_row(row, target_date) {
            events.push(event);
        }
    }

    Some(events)
}

/// The first `<table>` block carrying the calendar class.
fn find_calendar_table(html: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((start, end)) = next_tag_block(html, "<table", "</table>", pos) {
        let block = &html[start..end];
        if has_class(opening_tag(block), TABLE_CLASS) {
            return Some(block);
        }
        pos = end;
    }
    None
}

/// Parse one event row, applying the date, currency and impact filters.
fn parse_event_row(row: &str, target_date: NaiveDate) -> Option<EconomicEvent> {
    let mut date_text: Option<String> = None;
    let mut currency_text: Option<String> = None;
    let mut impact_high: Option<bool> = None;
    let mut time_text: Option<String> = None;
    let mut event_text: Option<String> = None;

    // First matching cell wins for each column, as in the upstream layout
    let mut pos = 0usize;
    while let Some((cell_start, cell_end)) = next_tag_block(row, "<td", "</td>", pos) {
        let cell = &row[cell_start..cell_end];
        pos = cell_end;

        let tag = opening_tag(cell);
        if date_text.is_none() && has_class(tag, DATE_CELL_CLASS) {
            date_text = Some(text_content(cell));
        } else if currency_text.is_none() && has_class(tag, CURRENCY_CELL_CLASS) {
            currency_text = Some(text_content(cell));
        } else if impact_high.is_none() && has_class(tag, IMPACT_CELL_CLASS) {
            impact_high = Some(has_class(tag, HIGH_IMPACT_CLASS));
        } else if time_text.is_none() && has_class(tag, TIME_CELL_CLASS) {
            time_text = Some(text_content(cell));
        } else if event_text.is_none() && has_class(tag, EVENT_CELL_CLASS) {
            event_text = Some(text_content(cell));
        }
    }

    // Rows without a date cell are skipped outright; a date that does not
    // parse falls back to the target date and keeps the row in play
    let date_text = date_text?;
    let event_date = parse_display_date(&date_text).unwrap_or(target_date);
    if event_date != target_date {
        return None;
    }

    // A missing currency cell does not disqualify the row
    if let Some(currency) = &currency_text {
        if currency != DOMESTIC_CURRENCY {
            return None;
        }
    }

    if !impact_high.unwrap_or(false) {
        return None;
    }

    Some(EconomicEvent {
        time: non_empty_or(time_text, "N/A"),
        name: non_empty_or(event_text, "Unknown"),
    })
}

fn non_empty_or(text: Option<String>, fallback: &str) -> String {
    match text {
        Some(t) if !t.is_empty() => t,
        _ => fallback.to_string(),
    }
}
