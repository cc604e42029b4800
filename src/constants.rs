use chrono_tz::Tz;

/// Public calendar page scraped for upcoming events
pub const CALENDAR_URL: &str = "https://www.forexfactory.com/calendar";

/// Browser identification sent with calendar requests; the upstream site
/// rejects unidentified clients
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Currency code calendar events are filtered on
pub const DOMESTIC_CURRENCY: &str = "USD";

/// Timezone label attached to event times in notifications
pub const EVENT_TIME_LABEL: &str = "EST";

/// Timezone the daily trigger and the target date are evaluated in
pub const SCHEDULE_TIMEZONE: Tz = Tz::Asia__Kolkata;

/// Default local time of day for the daily notification (HH:MM)
pub const DEFAULT_NOTIFY_TIME: &str = "00:55";

/// Upper bound for each outbound HTTP call
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Coarse polling interval of the schedule run loop
pub const POLL_INTERVAL_SECS: u64 = 60;

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "econwatch_rs=info";
