use serde::Deserialize;
use std::fmt;

use crate::error::{CycleError, Result};

// ---------------------------------------------------------------------------
// HomeworkStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn all() -> &'static [HomeworkStatus] {
        &[
            HomeworkStatus::Approved,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict delivered to the chat for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Review finished: the reviewer liked everything. Hooray!",
            HomeworkStatus::Reviewing => "The work has been taken up for review.",
            HomeworkStatus::Rejected => "Review finished: the reviewer left some remarks.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HomeworkStatus {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            _ => Err(CycleError::UnknownStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Homework
// ---------------------------------------------------------------------------

/// One homework entry as the API reports it.
///
/// Decoded leniently: either field may be absent on the wire and unknown
/// fields are ignored. [`parse_status`] enforces presence.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    #[serde(rename = "homework_name")]
    pub name: Option<String>,
    pub status: Option<String>,
}

/// Build the notification text for a homework entry.
///
/// Fails when the entry has no usable name or its status is outside the
/// known set. An absent status counts as unknown.
pub fn parse_status(homework: &Homework) -> Result<String> {
    let name = match homework.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(CycleError::MissingName),
    };
    let status: HomeworkStatus = homework.status.as_deref().unwrap_or_default().parse()?;
    Ok(format!(
        "Status of homework '{name}' changed. {verdict}",
        verdict = status.verdict()
    ))
}
