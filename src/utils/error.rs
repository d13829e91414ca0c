use thiserror::Error;

/// Fatal errors. Any of these aborts the run before dispatch starts.
#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("config file error: {path}: {message}")]
    ConfigFileError { path: String, message: String },

    #[error("no value for {field} in arguments or config defaults")]
    MissingKey { field: String },

    #[error("invalid value for {field}: {value}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Per-recipient send errors. Recorded in the outcome, never fatal —
/// the dispatch loop continues with the next recipient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("transport rejected the recipient: {0}")]
    Rejected(String),

    #[error("network failure: {0}")]
    Network(String),
}

pub type Result<T, E = ReminderError> = std::result::Result<T, E>;
