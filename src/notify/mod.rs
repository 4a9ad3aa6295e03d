//! Outbound announcement delivery.
//!
//! Posts the rendered digest to a Slack-style incoming webhook as a JSON
//! envelope `{"text": "<joined lines>"}`. Delivery is best-effort: callers
//! log failures and move on; there are no retries.

use std::time::Duration;

use serde_json::json;
use thiserror::Error;

/// Outbound request timeout.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur delivering an announcement.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The POST failed to send or the endpoint returned a non-success status.
    #[error("announcement POST failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the configured messaging webhook URL.
#[derive(Debug, Clone)]
pub struct Notifier {
    client: reqwest::Client,
    url: String,
}

impl Notifier {
    /// Creates a notifier targeting the given webhook URL.
    pub fn new(url: impl Into<String>) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()?;
        Ok(Notifier {
            client,
            url: url.into(),
        })
    }

    /// Returns the target webhook URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts `text` to the webhook as `{"text": text}`.
    pub async fn announce(&self, text: &str) -> Result<(), NotifyError> {
        self.client
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_keeps_the_url() {
        let notifier = Notifier::new("https://hooks.slack.com/services/T0/B0/x").unwrap();
        assert_eq!(notifier.url(), "https://hooks.slack.com/services/T0/B0/x");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        // Nothing listens on port 1; the connection is refused immediately.
        let notifier = Notifier::new("http://127.0.0.1:1/hook").unwrap();
        let result = notifier.announce("hello").await;
        assert!(matches!(result, Err(NotifyError::Http(_))));
    }
}
