use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use crate::error::NotifyError;

const TELEGRAM_API: &str = "https://api.telegram.org";

/// Sink for outgoing notifications.
///
/// `notify` is infallible by contract: a delivery problem must never abort
/// the poll loop, so implementations log failures and return.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str);
}

/// Telegram Bot API notifier bound to one chat.
pub struct TelegramNotifier {
    http: reqwest::Client,
    token: String,
    chat_id: String,
    base_url: String,
}

impl TelegramNotifier {
    pub fn new(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            token: token.into(),
            chat_id: chat_id.into(),
            base_url: TELEGRAM_API.to_string(),
        })
    }

    /// Point the notifier at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Deliver one message to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Telegram error bodies carry a human-readable `description`.
        let description = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| {
                v.get("description")
                    .and_then(|d| d.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| "no description".to_string());
        Err(NotifyError::Api {
            status: status.as_u16(),
            description,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) {
        match self.send_message(text).await {
            Ok(()) => tracing::debug!("delivered telegram message: {text}"),
            Err(e) => tracing::error!("telegram delivery failed: {e}"),
        }
    }
}
