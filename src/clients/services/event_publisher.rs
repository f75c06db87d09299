//! Client event publishing.
//!
//! Events are delivered as signed JSON over HTTP to a single configured
//! endpoint (normally the accounts server's `/internal/client-events`).
//! Delivery is fire-and-forget: sends run on a spawned task, failures are
//! logged, and the originating request never waits on or fails with the
//! delivery.

use crate::{
    clients::models::client::Client,
    events::{self, ClientEvent, ClientEventData},
    signing,
};
use chrono::Utc;
use uuid::Uuid;

/// Delivery timeout per event.
const SEND_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Publishes client lifecycle events.
///
/// Cheap to clone; handlers share one instance through the router state.
#[derive(Clone)]
pub struct EventPublisher {
    http: reqwest::Client,
    endpoint: Option<String>,
    secret: String,
}

impl EventPublisher {
    /// Build a publisher for the configured endpoint.
    ///
    /// `endpoint` may be `None`, in which case publishing is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid http(s) URL or the
    /// HTTP client cannot be constructed.
    pub fn new(endpoint: Option<String>, secret: String) -> anyhow::Result<Self> {
        if let Some(ref raw) = endpoint {
            let parsed = url::Url::parse(raw)?;
            if !matches!(parsed.scheme(), "http" | "https") {
                anyhow::bail!("event endpoint must use http or https: {raw}");
            }
        }

        let http = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;

        Ok(Self {
            http,
            endpoint,
            secret,
        })
    }

    /// Publish a `client.created` event for a freshly registered client.
    pub fn publish_created(&self, client: &Client) {
        self.spawn_send(self.build_event(events::CLIENT_CREATED, client));
    }

    /// Publish a `client.deleted` event carrying the removed client's
    /// last known data.
    pub fn publish_deleted(&self, client: &Client) {
        self.spawn_send(self.build_event(events::CLIENT_DELETED, client));
    }

    fn build_event(&self, event_type: &str, client: &Client) -> ClientEvent {
        ClientEvent {
            event_id: Uuid::new_v4(),
            event_type: event_type.to_string(),
            occurred_at: Utc::now(),
            client: ClientEventData {
                client_id: client.client_id.clone(),
                name: client.name.clone(),
                active: client.active,
            },
        }
    }

    /// Send an event on a background task.
    ///
    /// Individual delivery failures are logged; the caller's operation has
    /// already succeeded by the time this runs.
    fn spawn_send(&self, event: ClientEvent) {
        let Some(endpoint) = self.endpoint.clone() else {
            tracing::debug!(
                "no event endpoint configured, skipping {} for {}",
                event.event_type,
                event.client.client_id
            );
            return;
        };

        let http = self.http.clone();
        let secret = self.secret.clone();

        tokio::spawn(async move {
            if let Err(e) = send_event(&http, &endpoint, &secret, &event).await {
                tracing::error!(
                    "failed to deliver {} event {} to {}: {e:#}",
                    event.event_type,
                    event.event_id,
                    endpoint
                );
            }
        });
    }
}

/// Deliver one signed event.
async fn send_event(
    http: &reqwest::Client,
    endpoint: &str,
    secret: &str,
    event: &ClientEvent,
) -> anyhow::Result<()> {
    let payload = serde_json::to_string(event)?;
    let signature = signing::sign(secret, payload.as_bytes());

    let response = http
        .post(endpoint)
        .header("Content-Type", "application/json")
        .header(signing::SIGNATURE_HEADER, &signature)
        .header(signing::EVENT_ID_HEADER, event.event_id.to_string())
        .body(payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            "{} event {} answered with status {status}",
            event.event_type,
            event.event_id
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_endpoints() {
        assert!(
            EventPublisher::new(
                Some("http://localhost:8081/internal/client-events".to_string()),
                "secret".to_string()
            )
            .is_ok()
        );
        assert!(
            EventPublisher::new(
                Some("https://accounts.internal/client-events".to_string()),
                "secret".to_string()
            )
            .is_ok()
        );
    }

    #[test]
    fn accepts_missing_endpoint() {
        assert!(EventPublisher::new(None, "secret".to_string()).is_ok());
    }

    #[test]
    fn rejects_invalid_endpoints() {
        assert!(EventPublisher::new(Some("not a url".to_string()), "secret".to_string()).is_err());
        assert!(
            EventPublisher::new(Some("ftp://example.com".to_string()), "secret".to_string())
                .is_err()
        );
    }
}
