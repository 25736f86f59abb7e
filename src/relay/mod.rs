pub mod embed;

use std::time::Duration;

use crate::models::Inquiry;

/// Delivery failure. Transport errors and non-2xx responses collapse into
/// the same error; no caller distinguishes them.
#[derive(Debug)]
pub struct RelayError {
    pub message: String,
}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for RelayError {
    fn from(s: String) -> Self {
        RelayError { message: s }
    }
}

/// Forwards inquiries to the chat webhook as embed notifications.
pub struct Relay {
    client: reqwest::Client,
    webhook_url: String,
}

impl Relay {
    pub fn new(webhook_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
            webhook_url,
        }
    }

    /// Deliver one inquiry. Exactly one outbound POST per call; no retry,
    /// no idempotency key. A repeated call after a transient failure will
    /// produce a duplicate chat message.
    pub async fn deliver(&self, inquiry: &Inquiry) -> Result<(), RelayError> {
        let body = embed::notification(inquiry, chrono::Utc::now());

        let resp = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::from(format!("Webhook request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            return Err(RelayError::from(format!(
                "Webhook rejected notification: {status} {detail}"
            )));
        }

        Ok(())
    }
}
