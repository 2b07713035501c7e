//! Discord webhook notifier

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use fleetbook_domain::notifier::ChangeNotifier;
use fleetbook_types::NotifyError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts messages to a Discord-compatible webhook as `{"content": ...}`
pub struct DiscordWebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl DiscordWebhookNotifier {
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ChangeNotifier for DiscordWebhookNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "content": message }))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "webhook request failed");
                NotifyError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "webhook rejected message");
            return Err(NotifyError::Status(status.as_u16()));
        }

        debug!(status = status.as_u16(), "webhook accepted message");
        Ok(())
    }
}
