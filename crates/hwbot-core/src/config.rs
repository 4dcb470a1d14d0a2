use std::time::Duration;

use crate::error::ConfigError;

/// Production status endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Seconds between poll cycles.
pub const DEFAULT_POLL_SECS: u64 = 600;

/// Seconds before an outbound HTTP request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for the monitor.
///
/// Assembled by the caller (the CLI maps flags and environment variables
/// onto this struct); nothing in the library reads the environment directly.
#[derive(Clone)]
pub struct Settings {
    /// OAuth token for the homework status API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Telegram chat that receives notifications.
    pub chat_id: String,
    /// Base URL of the status endpoint.
    pub endpoint: String,
    /// Delay between poll cycles.
    pub poll_interval: Duration,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            practicum_token: String::new(),
            telegram_token: String::new(),
            chat_id: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Check that every credential is present.
    ///
    /// An empty string counts as missing. The error lists every absent
    /// credential by its environment variable name, not just the first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.practicum_token.is_empty() {
            missing.push("PRACTICUM_TOKEN");
        }
        if self.telegram_token.is_empty() {
            missing.push("TELEGRAM_TOKEN");
        }
        if self.chat_id.is_empty() {
            missing.push("TELEGRAM_CHAT_ID");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing.join(", ")))
        }
    }
}
