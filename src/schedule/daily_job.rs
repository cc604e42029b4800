use tracing::{error, info};

use crate::calendar::EventFetcher;
use crate::constants::SCHEDULE_TIMEZONE;
use crate::holidays::is_bank_holiday;
use crate::notify::Notifier;
use crate::utils::datetime::today_in;
use crate::utils::message_formatter::build_notification_message;

/// One full pipeline run: holiday check, optional calendar fetch, message
/// formatting, delivery.
///
/// Every step degrades on failure instead of raising, so a bad run can
/// never take down the schedule loop.
pub async fn run_daily_notification(fetcher: &EventFetcher, notifier: &Notifier) {
    let today = today_in(SCHEDULE_TIMEZONE);

    let is_holiday = is_bank_holiday(today);
    let events = if is_holiday {
        info!("Bank holiday detected on {}, skipping calendar fetch", today);
        Vec::new()
    } else {
        fetcher.high_impact_events(today).await
    };

    let message = build_notification_message(is_holiday, &events, today);

    if !notifier.send(&message).await {
        // Next scheduled run is unaffected
        error!("Daily notification could not be delivered on any route");
    }
}
