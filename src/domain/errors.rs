use thiserror::Error;

use crate::domain::models::{ErrorCode, Response};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the message must have at least one registration id")]
    NoRecipients,
    #[error("the message may specify at most 1000 registration ids, got {0}")]
    TooManyRecipients(usize),
    #[error("the message's time to live must be between 0 and 2419200 seconds, got {0}")]
    InvalidTimeToLive(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("gateway rejected the request body as invalid JSON")]
    InvalidJson,
    #[error("gateway rejected the API key")]
    Authentication,
    #[error("gateway answered with unexpected status {0}")]
    UnexpectedStatus(u16),
    #[error("gateway returned error: {0}")]
    Rejected(ErrorCode),
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("invalid sender configuration: {0}")]
    Configuration(&'static str),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to encode message: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("failed to decode gateway response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("transport error: {0:#}")]
    Transport(anyhow::Error),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The gateway answered with failures or canonical id changes but no
    /// recipient is left that a retry could reach.
    #[error(
        "delivery incomplete: {} failure(s), {} canonical id change(s), nothing left to retry",
        .response.failure,
        .response.canonical_ids
    )]
    Undeliverable { response: Box<Response> },
    #[error(
        "retry limit exceeded after {retries} retries, {} recipient(s) still pending",
        .recipients.len()
    )]
    RetryLimitExceeded {
        retries: u32,
        /// Registration ids still marked unavailable when the loop gave up.
        recipients: Vec<String>,
        /// Last response decoded from the gateway, if any attempt produced one.
        response: Option<Box<Response>>,
    },
}

impl SendError {
    /// Last known gateway response attached to the error.
    pub fn response(&self) -> Option<&Response> {
        match self {
            SendError::Undeliverable { response } => Some(response),
            SendError::RetryLimitExceeded { response, .. } => response.as_deref(),
            _ => None,
        }
    }
}
