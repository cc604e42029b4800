use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Timelike};
use chrono_tz::Tz;

/// Error types for schedule construction
#[derive(Debug)]
pub enum ScheduleError {
    InvalidTime(String),
    InvalidCron(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidTime(msg) => write!(f, "Invalid time format: {}", msg),
            ScheduleError::InvalidCron(msg) => write!(f, "Invalid cron expression: {}", msg),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// The single recurring trigger: a daily cron expression evaluated in a
/// fixed timezone.
///
/// Created once at startup and never mutated afterwards.
pub struct ScheduleEntry {
    cron: cron::Schedule,
    cron_expression: String,
    timezone: Tz,
}

impl ScheduleEntry {
    /// Build a trigger that fires once a day at `time_str` (HH:MM), local
    /// to `timezone`.
    pub fn daily_at(time_str: &str, timezone: Tz) -> Result<Self, ScheduleError> {
        let time = parse_time_string(time_str)?;
        let cron_expression = create_cron_expression(time);
        let cron = cron::Schedule::from_str(&cron_expression)
            .map_err(|e| ScheduleError::InvalidCron(e.to_string()))?;
        Ok(Self {
            cron,
            cron_expression,
            timezone,
        })
    }

    pub fn cron_expression(&self) -> &str {
        &self.cron_expression
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Next fire time strictly after `after`.
    pub fn next_fire(&self, after: DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.cron.after(&after).next()
    }

    /// Next fire time relative to the current instant.
    pub fn upcoming(&self) -> Option<DateTime<Tz>> {
        self.cron.upcoming(self.timezone).next()
    }
}

/// Parse a time string in HH:MM format
fn parse_time_string(time_str: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(time_str, "%H:%M").map_err(|_| {
        ScheduleError::InvalidTime(format!("Expected HH:MM format, got '{}'", time_str))
    })
}

/// Create a daily cron expression from a local time of day
fn create_cron_expression(time: NaiveTime) -> String {
    format!("0 {} {} * * *", time.minute(), time.hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    const IST: Tz = Tz::Asia__Kolkata;

    #[test]
    fn test_parse_time_string() {
        assert!(parse_time_string("00:55").is_ok());
        assert!(parse_time_string("23:59").is_ok());
        assert!(parse_time_string("24:00").is_err());
        assert!(parse_time_string("invalid").is_err());
    }

    #[test]
    fn test_create_cron_expression() {
        let time = NaiveTime::from_hms_opt(0, 55, 0).unwrap();
        assert_eq!(create_cron_expression(time), "0 55 0 * * *");

        let time = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        assert_eq!(create_cron_expression(time), "0 30 8 * * *");
    }

    #[test]
    fn test_daily_at_rejects_bad_input() {
        assert!(ScheduleEntry::daily_at("00:55", IST).is_ok());
        assert!(ScheduleEntry::daily_at("55", IST).is_err());
        assert!(ScheduleEntry::daily_at("", IST).is_err());
    }

    #[test]
    fn test_next_fire_lands_on_the_configured_local_time() {
        let entry = ScheduleEntry::daily_at("00:55", IST).unwrap();

        // Later the same day: the trigger rolls over to the next morning
        let after = IST.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap();
        let next = entry.next_fire(after).unwrap();
        assert_eq!(next.day(), 8);
        assert_eq!(next.hour(), 0);
        assert_eq!(next.minute(), 55);

        // Just before the trigger time: fires the same day
        let after = IST.with_ymd_and_hms(2025, 8, 7, 0, 30, 0).unwrap();
        let next = entry.next_fire(after).unwrap();
        assert_eq!(next.day(), 7);
        assert_eq!(next.hour(), 0);
        assert_eq!(next.minute(), 55);
    }

    #[test]
    fn test_upcoming_is_in_the_future() {
        let entry = ScheduleEntry::daily_at("00:55", IST).unwrap();
        let next = entry.upcoming().unwrap();
        let now = chrono::Utc::now().with_timezone(&IST);
        assert!(next > now);
    }
}
