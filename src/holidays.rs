use chrono::{Datelike, NaiveDate};

/// US bank holidays for 2025 as (month, day) pairs.
///
/// Lookup ignores the year component: any date whose month and day appear
/// here counts as a holiday, whatever its year. Known limitation of the
/// fixed yearly list.
pub const BANK_HOLIDAYS_2025: [(u32, u32); 11] = [
    (1, 1),   // New Year's Day
    (1, 20),  // Martin Luther King Jr. Day
    (2, 17),  // Washington's Birthday
    (5, 26),  // Memorial Day
    (6, 19),  // Juneteenth
    (7, 4),   // Independence Day
    (9, 1),   // Labor Day
    (10, 13), // Columbus Day/Indigenous Peoples' Day
    (11, 11), // Veterans Day
    (11, 27), // Thanksgiving Day
    (12, 25), // Christmas Day
];

/// Check if the given date is a US bank holiday.
pub fn is_bank_holiday(date: NaiveDate) -> bool {
    BANK_HOLIDAYS_2025.contains(&(date.month(), date.day()))
}
