use async_trait::async_trait;
use serenity::builder::ExecuteWebhook;
use serenity::http::{Http, HttpError};
use serenity::model::webhook::Webhook;

use super::{DeliveryRoute, RouteError};

/// Primary delivery path: the Discord webhook client.
///
/// No bot token involved; the webhook URL itself carries the credential.
pub struct DiscordWebhookRoute {
    http: Http,
    url: String,
}

impl DiscordWebhookRoute {
    pub fn new(url: String) -> Self {
        Self {
            http: Http::new(""),
            url,
        }
    }
}

#[async_trait]
impl DeliveryRoute for DiscordWebhookRoute {
    fn name(&self) -> &'static str {
        "discord-webhook"
    }

    async fn deliver(&self, content: &str) -> Result<(), RouteError> {
        let webhook = Webhook::from_url(&self.http, &self.url)
            .await
            .map_err(route_error)?;
        webhook
            .execute(&self.http, false, ExecuteWebhook::new().content(content))
            .await
            .map_err(route_error)?;
        Ok(())
    }
}

/// Surface the HTTP status when the client reports one.
fn route_error(err: serenity::Error) -> RouteError {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            RouteError::Status(response.status_code.as_u16())
        }
        other => RouteError::Transport(other.to_string()),
    }
}
