//! `hwbot-core` — poll loop and delivery pipeline for the homework monitor.
//!
//! The crate watches one user's homework submission on the review API and
//! forwards every status transition to a Telegram chat. Everything revolves
//! around a single fixed-cadence cycle.
//!
//! # Architecture
//!
//! ```text
//! Monitor             ← owns the watermark, sleeps out the interval
//!     │
//!     ▼
//! StatusClient        ← GET <endpoint>?from_date=<watermark>
//!     │
//!     ▼
//! response::validate  ← shape-checks the payload into PollResponse
//!     │
//!     ▼
//! parse_status        ← first entry → "Status of homework '…' changed. …"
//!     │
//!     ▼
//! Notifier            ← Telegram sendMessage; failures logged, never fatal
//! ```
//!
//! A cycle that fails at any stage leaves the watermark untouched, so the
//! next tick re-polls the same window: updates are delivered at least once,
//! never silently dropped.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hwbot_core::{Monitor, PracticumClient, Settings, TelegramNotifier};
//!
//! let settings = Settings::default(); // credentials come from the caller
//! let client = PracticumClient::new(
//!     &settings.endpoint,
//!     &settings.practicum_token,
//!     settings.request_timeout,
//! )?;
//! let notifier = TelegramNotifier::new(
//!     &settings.telegram_token,
//!     &settings.chat_id,
//!     settings.request_timeout,
//! )?;
//! Monitor::new(client, notifier, settings.poll_interval).run().await;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod homework;
pub mod monitor;
pub mod notify;
pub mod response;

pub use client::{PracticumClient, StatusClient};
pub use config::Settings;
pub use error::{ConfigError, CycleError, NotifyError, Result};
pub use homework::{parse_status, Homework, HomeworkStatus};
pub use monitor::{CycleOutcome, Monitor};
pub use notify::{Notifier, TelegramNotifier};
pub use response::PollResponse;
