/// Outbound notification delivery
mod discord;
mod fallback;

pub use discord::DiscordWebhookRoute;
pub use fallback::RawPostRoute;

use async_trait::async_trait;
use tracing::{error, info};

/// Why a single delivery attempt failed.
#[derive(Debug, Clone)]
pub enum RouteError {
    /// The endpoint answered with a non-success status
    Status(u16),
    /// The request never completed (connect, TLS, timeout, ...)
    Transport(String),
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::Status(code) => write!(f, "unexpected status {}", code),
            RouteError::Transport(msg) => write!(f, "transport error: {}", msg),
        }
    }
}

impl std::error::Error for RouteError {}

/// HTTP statuses the webhook endpoint uses to acknowledge a delivery.
pub fn is_delivery_success(status: u16) -> bool {
    status == 200 || status == 204
}

/// One way of getting a message to the destination.
#[async_trait]
pub trait DeliveryRoute: Send + Sync {
    fn name(&self) -> &'static str;
    async fn deliver(&self, content: &str) -> Result<(), RouteError>;
}

/// Tries each configured route in order until one accepts the message.
pub struct Notifier {
    routes: Vec<Box<dyn DeliveryRoute>>,
}

impl Notifier {
    /// Standard Discord setup: webhook client first, raw POST as fallback.
    pub fn discord(webhook_url: String) -> Self {
        Self::with_routes(vec![
            Box::new(DiscordWebhookRoute::new(webhook_url.clone())),
            Box::new(RawPostRoute::new(webhook_url)),
        ])
    }

    pub fn with_routes(routes: Vec<Box<dyn DeliveryRoute>>) -> Self {
        Self { routes }
    }

    /// Deliver `content`, falling through the route list on failure.
    ///
    /// Returns whether any route accepted the message. Exhausting the list
    /// is logged but never raised; the caller's run must complete either
    /// way.
    pub async fn send(&self, content: &str) -> bool {
        for route in &self.routes {
            match route.deliver(content).await {
                Ok(()) => {
                    info!("Notification sent successfully via {}", route.name());
                    return true;
                }
                Err(e) => {
                    error!("Failed to send notification via {}: {}", route.name(), e);
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubRoute {
        name: &'static str,
        outcome: Result<(), RouteError>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DeliveryRoute for StubRoute {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn deliver(&self, _content: &str) -> Result<(), RouteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn stub(
        name: &'static str,
        outcome: Result<(), RouteError>,
    ) -> (Box<dyn DeliveryRoute>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let route = StubRoute {
            name,
            outcome,
            calls: Arc::clone(&calls),
        };
        (Box::new(route), calls)
    }

    #[tokio::test]
    async fn falls_back_when_the_primary_fails() {
        let (primary, primary_calls) = stub(
            "primary",
            Err(RouteError::Transport("connection reset".to_string())),
        );
        let (fallback, fallback_calls) = stub("fallback", Ok(()));
        let notifier = Notifier::with_routes(vec![primary, fallback]);

        assert!(notifier.send("hello").await);
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn first_success_stops_the_chain() {
        let (primary, primary_calls) = stub("primary", Ok(()));
        let (fallback, fallback_calls) = stub("fallback", Ok(()));
        let notifier = Notifier::with_routes(vec![primary, fallback]);

        assert!(notifier.send("hello").await);
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn total_failure_reports_false_without_panicking() {
        let (primary, _) = stub("primary", Err(RouteError::Status(500)));
        let (fallback, _) = stub("fallback", Err(RouteError::Status(403)));
        let notifier = Notifier::with_routes(vec![primary, fallback]);

        assert!(!notifier.send("hello").await);
    }

    #[tokio::test]
    async fn each_route_is_attempted_at_most_once() {
        let (primary, primary_calls) = stub("primary", Err(RouteError::Status(429)));
        let (fallback, fallback_calls) = stub(
            "fallback",
            Err(RouteError::Transport("timed out".to_string())),
        );
        let notifier = Notifier::with_routes(vec![primary, fallback]);

        notifier.send("hello").await;
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn delivery_success_statuses() {
        assert!(is_delivery_success(200));
        assert!(is_delivery_success(204));
        assert!(!is_delivery_success(201));
        assert!(!is_delivery_success(404));
        assert!(!is_delivery_success(500));
    }
}
