use chrono::Utc;
use std::time::Duration;

use crate::client::StatusClient;
use crate::error::Result;
use crate::homework::parse_status;
use crate::notify::Notifier;
use crate::response;

/// What a single poll cycle produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The tracked submission changed status; the notification text is ready.
    StatusChanged(String),
    /// Nothing new since the watermark.
    NoUpdates,
}

/// The poll loop: fetch, validate, interpret, deliver, sleep, repeat.
///
/// Owns the watermark that bounds each poll window. The watermark advances
/// only when a cycle succeeds end to end, so a failed cycle re-polls the
/// same window on the next tick and an update is re-announced rather than
/// lost. The API returns homeworks most recent first; only the first entry
/// is interpreted per cycle (a single tracked submission).
pub struct Monitor<C, N> {
    client: C,
    notifier: N,
    interval: Duration,
    watermark: i64,
}

impl<C: StatusClient, N: Notifier> Monitor<C, N> {
    /// Start monitoring from the current time.
    pub fn new(client: C, notifier: N, interval: Duration) -> Self {
        Self {
            client,
            notifier,
            interval,
            watermark: Utc::now().timestamp(),
        }
    }

    /// Resume from a known watermark instead of the current time.
    pub fn with_watermark(mut self, watermark: i64) -> Self {
        self.watermark = watermark;
        self
    }

    /// Lower bound of the next poll window, seconds since epoch.
    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    /// Run one cycle up to interpretation. Sends nothing.
    ///
    /// On success the watermark advances to the server's `current_date`;
    /// on any error it is left untouched.
    pub async fn poll_once(&mut self) -> Result<CycleOutcome> {
        let raw = self.client.poll(self.watermark).await?;
        let response = response::validate(&raw)?;
        let outcome = match response.homeworks.first() {
            Some(homework) => CycleOutcome::StatusChanged(parse_status(homework)?),
            None => CycleOutcome::NoUpdates,
        };
        self.watermark = response.current_date;
        Ok(outcome)
    }

    /// Run one full cycle, containing every failure.
    ///
    /// A status change is delivered to the notifier; a quiet cycle is only
    /// logged; an error is logged and announced once as a failure message.
    pub async fn cycle(&mut self) {
        match self.poll_once().await {
            Ok(CycleOutcome::StatusChanged(message)) => self.notifier.notify(&message).await,
            Ok(CycleOutcome::NoUpdates) => {
                tracing::debug!(watermark = self.watermark, "no homework updates");
            }
            Err(e) => {
                tracing::error!("poll cycle failed: {e}");
                self.notifier.notify(&format!("Monitor failure: {e}")).await;
            }
        }
    }

    /// Loop forever at a fixed cadence.
    ///
    /// The sleep is unconditional: failed cycles wait out the same interval
    /// as quiet ones. No backoff. Runs until the process is terminated.
    pub async fn run(mut self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            watermark = self.watermark,
            "homework monitor started"
        );
        loop {
            self.cycle().await;
            tokio::time::sleep(self.interval).await;
        }
    }
}
