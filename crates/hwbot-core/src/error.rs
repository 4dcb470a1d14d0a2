use thiserror::Error;

#[derive(Debug, Error)]
pub enum CycleError {
    #[error("status endpoint request failed: {0}")]
    Transport(String),

    #[error("status response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("status response is not a JSON object")]
    NotAnObject,

    #[error("status response is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has the wrong type: expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("homework entry has no name")]
    MissingName,

    #[error("unknown homework status: '{0}'")]
    UnknownStatus(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("telegram API rejected the message ({status}): {description}")]
    Api { status: u16, description: String },
}

pub type Result<T> = std::result::Result<T, CycleError>;
