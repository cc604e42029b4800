/// Calendar scraping: fetch the upstream page and extract qualifying events
mod parser;

pub use parser::extract_events;

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::constants::{BROWSER_USER_AGENT, CALENDAR_URL, HTTP_TIMEOUT_SECS};
use crate::models::EconomicEvent;

/// Fetches the public calendar page and extracts high-impact events.
pub struct EventFetcher {
    client: reqwest::Client,
    url: String,
}

impl EventFetcher {
    pub fn new() -> Self {
        Self::with_url(CALENDAR_URL.to_string())
    }

    fn with_url(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// High-impact domestic-currency events published for the target date.
    ///
    /// Fetch and parse problems degrade to an empty list; they never fail
    /// the run.
    pub async fn high_impact_events(&self, target_date: NaiveDate) -> Vec<EconomicEvent> {
        let body = match self.fetch_page().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to fetch calendar page: {}", e);
                return Vec::new();
            }
        };

        let events = match extract_events(&body, target_date) {
            Some(events) => events,
            None => {
                warn!("No calendar table found on the fetched page");
                return Vec::new();
            }
        };

        info!(
            "Fetched {} high-impact event(s) for {}",
            events.len(),
            target_date
        );
        events
    }

    async fn fetch_page(&self) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    }
}
