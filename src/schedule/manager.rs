use chrono::Utc;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

use super::daily_job::run_daily_notification;
use super::types::ScheduleEntry;
use crate::calendar::EventFetcher;
use crate::constants::POLL_INTERVAL_SECS;
use crate::notify::Notifier;

/// Run the schedule loop: poll for the due trigger on a coarse interval
/// and fire the daily job exactly once per occurrence.
///
/// Runs until the process is terminated; a failing run never stops the
/// loop.
pub async fn run_schedule_manager(entry: ScheduleEntry, fetcher: EventFetcher, notifier: Notifier) {
    info!(
        "Schedule manager started (cron: '{}', timezone: {})",
        entry.cron_expression(),
        entry.timezone()
    );

    let poll_interval = Duration::from_secs(POLL_INTERVAL_SECS);
    let mut next_fire = entry.upcoming();

    if let Some(due) = next_fire {
        let now = Utc::now().with_timezone(&entry.timezone());
        info!("First notification in {} minutes", (due - now).num_minutes());
    }

    loop {
        match next_fire {
            Some(due) => {
                let now = Utc::now().with_timezone(&entry.timezone());
                if now >= due {
                    info!("Running daily notification job");
                    run_daily_notification(&fetcher, &notifier).await;

                    next_fire = entry.next_fire(now);
                    if let Some(due) = next_fire {
                        let now = Utc::now().with_timezone(&entry.timezone());
                        info!("Next notification in {} minutes", (due - now).num_minutes());
                    }
                }
            }
            None => {
                // A daily cron expression always has an upcoming occurrence;
                // recompute rather than give up
                error!(
                    "No upcoming fire time for cron '{}'",
                    entry.cron_expression()
                );
                next_fire = entry.upcoming();
            }
        }

        sleep(poll_interval).await;
    }
}
