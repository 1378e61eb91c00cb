use std::fmt;

use serde::{Deserialize, Serialize};

/// Error codes the gateway reports, either per recipient or at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    MissingRegistration,
    InvalidRegistration,
    NotRegistered,
    InvalidPackageName,
    MismatchSenderId,
    MessageTooBig,
    InvalidDataKey,
    InvalidTtl,
    Unavailable,
    InternalServerError,
    DeviceMessageRateExceeded,
    TopicsMessageRateExceeded,
    Other(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::MissingRegistration => "MissingRegistration",
            ErrorCode::InvalidRegistration => "InvalidRegistration",
            ErrorCode::NotRegistered => "NotRegistered",
            ErrorCode::InvalidPackageName => "InvalidPackageName",
            ErrorCode::MismatchSenderId => "MismatchSenderId",
            ErrorCode::MessageTooBig => "MessageTooBig",
            ErrorCode::InvalidDataKey => "InvalidDataKey",
            ErrorCode::InvalidTtl => "InvalidTtl",
            ErrorCode::Unavailable => "Unavailable",
            ErrorCode::InternalServerError => "InternalServerError",
            ErrorCode::DeviceMessageRateExceeded => "DeviceMessageRateExceeded",
            ErrorCode::TopicsMessageRateExceeded => "TopicsMessageRateExceeded",
            ErrorCode::Other(code) => code,
        }
    }

    /// The registration id is no longer usable and should be dropped by the
    /// caller.
    pub fn is_stale_registration(&self) -> bool {
        matches!(
            self,
            ErrorCode::MissingRegistration
                | ErrorCode::InvalidRegistration
                | ErrorCode::NotRegistered
        )
    }
}

impl From<String> for ErrorCode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MissingRegistration" => ErrorCode::MissingRegistration,
            "InvalidRegistration" => ErrorCode::InvalidRegistration,
            "NotRegistered" => ErrorCode::NotRegistered,
            "InvalidPackageName" => ErrorCode::InvalidPackageName,
            "MismatchSenderId" => ErrorCode::MismatchSenderId,
            "MessageTooBig" => ErrorCode::MessageTooBig,
            "InvalidDataKey" => ErrorCode::InvalidDataKey,
            "InvalidTtl" => ErrorCode::InvalidTtl,
            "Unavailable" => ErrorCode::Unavailable,
            "InternalServerError" => ErrorCode::InternalServerError,
            "DeviceMessageRateExceeded" => ErrorCode::DeviceMessageRateExceeded,
            "TopicsMessageRateExceeded" => ErrorCode::TopicsMessageRateExceeded,
            _ => ErrorCode::Other(value),
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome for a single recipient of a multicast send.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Canonical registration id the caller should use from now on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl DeliveryResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Only temporarily unavailable recipients are worth sending to again.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.error, Some(ErrorCode::Unavailable))
    }
}

/// The gateway's reply to a send request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multicast_id: Option<i64>,
    #[serde(default)]
    pub success: u32,
    #[serde(default)]
    pub failure: u32,
    #[serde(default)]
    pub canonical_ids: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<DeliveryResult>,
}

impl Response {
    /// No failures, no canonical id changes and no top-level error.
    pub fn is_ok(&self) -> bool {
        self.failure == 0 && self.canonical_ids == 0 && self.error.is_none()
    }

    pub fn has_unavailable(&self) -> bool {
        self.results.iter().any(DeliveryResult::is_unavailable)
    }

    /// Whether the aggregate counters agree with the per-recipient results.
    /// Replies without results are trivially consistent.
    pub fn is_consistent(&self) -> bool {
        if self.results.is_empty() {
            return true;
        }
        let failure = self.results.iter().filter(|r| !r.is_success()).count();
        let canonical = self
            .results
            .iter()
            .filter(|r| r.is_success() && r.registration_id.is_some())
            .count();
        self.success as usize == self.results.len() - failure
            && self.failure as usize == failure
            && self.canonical_ids as usize == canonical
    }

    /// Pairs of (registration id sent, canonical id reported) for the
    /// recipients of the request that produced this response.
    pub fn canonical_changes<'a>(
        &'a self,
        registration_ids: &'a [String],
    ) -> Vec<(&'a str, &'a str)> {
        registration_ids
            .iter()
            .zip(&self.results)
            .filter_map(|(sent, result)| {
                result
                    .registration_id
                    .as_deref()
                    .map(|canonical| (sent.as_str(), canonical))
            })
            .collect()
    }

    /// Registration ids the gateway reported as permanently invalid.
    pub fn stale_registrations<'a>(&self, registration_ids: &'a [String]) -> Vec<&'a str> {
        registration_ids
            .iter()
            .zip(&self.results)
            .filter(|(_, result)| {
                result
                    .error
                    .as_ref()
                    .is_some_and(ErrorCode::is_stale_registration)
            })
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
