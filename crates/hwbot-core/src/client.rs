use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::error::{CycleError, Result};

/// Source of raw status payloads.
///
/// The monitor drives whatever implements this; production uses
/// [`PracticumClient`], tests script their own.
#[async_trait]
pub trait StatusClient: Send + Sync {
    /// Fetch every update registered since `from_date`.
    async fn poll(&self, from_date: i64) -> Result<Value>;
}

/// HTTP client for the homework status API.
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl StatusClient for PracticumClient {
    /// One `GET <endpoint>?from_date=…` attempt. No internal retry: the
    /// poll cadence is the retry policy.
    async fn poll(&self, from_date: i64) -> Result<Value> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("from_date", from_date)])
            .header("Authorization", format!("OAuth {}", self.token))
            .send()
            .await
            .map_err(|e| CycleError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CycleError::Transport(format!(
                "status endpoint answered {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CycleError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
