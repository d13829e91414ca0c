use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::SendError;

/// The channel set selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMethod {
    Email,
    Text,
    Both,
}

impl fmt::Display for DispatchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMethod::Email => write!(f, "email"),
            DispatchMethod::Text => write!(f, "text"),
            DispatchMethod::Both => write!(f, "both"),
        }
    }
}

/// A fully resolved reminder: CLI values merged over the JSON defaults.
/// Built once per run and never re-merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub recipients: Vec<String>,
    pub phones: Vec<String>,
    pub message: String,
    pub subject: String,
    pub method: Option<DispatchMethod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Text,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    Sent,
    InvalidFormat,
    TransportError(SendError),
}

/// The result of a single send attempt. Consumed for logging and the end
/// of run summary only, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub recipient: String,
    pub channel: Channel,
    pub status: DeliveryStatus,
}

impl DispatchOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self.status, DeliveryStatus::Sent)
    }
}
