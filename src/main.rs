mod calendar;
mod constants;
mod holidays;
mod models;
mod notify;
mod schedule;
mod utils;

use tracing::{error, info};

use crate::{
    calendar::EventFetcher,
    constants::{DEFAULT_NOTIFY_TIME, LOG_DIRECTIVE, SCHEDULE_TIMEZONE},
    notify::Notifier,
    schedule::{ScheduleEntry, run_schedule_manager},
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let entry = match ScheduleEntry::daily_at(&config.notify_time, SCHEDULE_TIMEZONE) {
        Ok(entry) => entry,
        Err(e) => {
            error!("Invalid notification schedule: {}", e);
            std::process::exit(1);
        }
    };

    let fetcher = EventFetcher::new();
    let notifier = Notifier::discord(config.webhook_url);

    info!(
        "Daily notification scheduled at {} ({})",
        config.notify_time, SCHEDULE_TIMEZONE
    );

    run_schedule_manager(entry, fetcher, notifier).await;
}

/// Configuration loaded from environment variables
struct Config {
    webhook_url: String,
    notify_time: String,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let webhook_url = std::env::var("DISCORD_WEBHOOK_URL").map_err(|_| {
        "DISCORD_WEBHOOK_URL environment variable not set. Set it with: export DISCORD_WEBHOOK_URL=your_webhook_url"
    })?;

    // Optional: override the default trigger time
    let notify_time =
        std::env::var("NOTIFY_TIME").unwrap_or_else(|_| DEFAULT_NOTIFY_TIME.to_string());

    Ok(Config {
        webhook_url,
        notify_time,
    })
}
