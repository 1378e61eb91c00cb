use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::ValidationError;

use super::response::Response;

/// Upper bound on registration ids per request, imposed by the gateway.
pub const MAX_REGISTRATION_IDS: usize = 1000;
/// Four weeks, the longest time to live the gateway accepts.
pub const MAX_TIME_TO_LIVE: i64 = 2_419_200;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Normal,
    High,
}

/// Display payload rendered by the device on behalf of the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_loc_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body_loc_args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_loc_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title_loc_args: Vec<String>,
}

/// Downstream message as accepted by the gateway's JSON send endpoint.
///
/// `registration_ids` is order-significant: the gateway answers with one
/// result per id, in the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub registration_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub content_available: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub delay_while_idle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_package_name: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dry_run: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Message {
    pub fn new<I, S>(data: HashMap<String, Value>, registration_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            registration_ids: registration_ids.into_iter().map(Into::into).collect(),
            data,
            ..Default::default()
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn with_time_to_live(mut self, seconds: i64) -> Self {
        self.time_to_live = Some(seconds);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_collapse_key(mut self, key: impl Into<String>) -> Self {
        self.collapse_key = Some(key.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let count = self.registration_ids.len();
        if count == 0 {
            return Err(ValidationError::NoRecipients);
        }
        if count > MAX_REGISTRATION_IDS {
            return Err(ValidationError::TooManyRecipients(count));
        }
        if let Some(ttl) = self.time_to_live {
            if !(0..=MAX_TIME_TO_LIVE).contains(&ttl) {
                return Err(ValidationError::InvalidTimeToLive(ttl));
            }
        }
        Ok(())
    }

    /// Copy of this message addressed only to the recipients the gateway
    /// reported as temporarily unavailable in `response`.
    ///
    /// Results are matched to `registration_ids` by position. A response
    /// without per-recipient results (an overload reply) leaves the
    /// recipient set as it is.
    pub fn narrowed(&self, response: &Response) -> Message {
        if response.results.is_empty() {
            return self.clone();
        }

        let registration_ids = self
            .registration_ids
            .iter()
            .zip(&response.results)
            .filter(|(_, result)| result.is_unavailable())
            .map(|(id, _)| id.clone())
            .collect();

        Message {
            registration_ids,
            ..self.clone()
        }
    }
}
