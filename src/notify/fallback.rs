use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{DeliveryRoute, RouteError, is_delivery_success};
use crate::constants::HTTP_TIMEOUT_SECS;

/// Fallback delivery path: a raw JSON POST to the webhook endpoint.
pub struct RawPostRoute {
    client: reqwest::Client,
    url: String,
}

impl RawPostRoute {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl DeliveryRoute for RawPostRoute {
    fn name(&self) -> &'static str {
        "raw-post"
    }

    async fn deliver(&self, content: &str) -> Result<(), RouteError> {
        let response = self
            .client
            .post(&self.url)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|e| RouteError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if is_delivery_success(status) {
            Ok(())
        } else {
            Err(RouteError::Status(status))
        }
    }
}
