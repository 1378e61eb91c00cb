use std::{env::var, str::FromStr, time::Duration};

use dotenvy::dotenv;
use thiserror::Error;

use crate::application::services::backoff::{Backoff, DEFAULT_BASE_DELAY, DEFAULT_MAX_DELAY};

/// Production send endpoint of the gateway.
pub const GCM_SEND_ENDPOINT: &str = "https://gcm-http.googleapis.com/gcm/send";

pub const DEFAULT_RETRY_COUNT: u32 = 3;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {0} env param")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name} env param")]
    Invalid { name: &'static str, value: String },
}

/// Everything a [`Dispatcher`](crate::Dispatcher) needs, fixed at construction.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub api_key: String,
    pub retry_count: u32,
    pub timeout: Duration,
    pub endpoint: String,
    pub backoff: Backoff,
}

impl DispatcherConfig {
    pub fn new(api_key: impl Into<String>, retry_count: u32, timeout: Duration) -> Self {
        Self {
            api_key: api_key.into(),
            retry_count,
            timeout,
            endpoint: GCM_SEND_ENDPOINT.to_string(),
            backoff: Backoff::default(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    /// Reads the configuration from the process environment, loading a
    /// `.env` file first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv();
        Self::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GCM_API_KEY").ok_or(ConfigError::Missing("GCM_API_KEY"))?;

        let retry_count = parse_or(&lookup, "GCM_RETRY_COUNT", DEFAULT_RETRY_COUNT)?;
        let timeout = parse_or(&lookup, "GCM_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs())
            .map(Duration::from_secs)?;
        let endpoint = lookup("GCM_ENDPOINT").unwrap_or_else(|| GCM_SEND_ENDPOINT.to_string());
        let base = parse_or(
            &lookup,
            "GCM_BACKOFF_BASE_MS",
            DEFAULT_BASE_DELAY.as_millis() as u64,
        )
        .map(Duration::from_millis)?;
        let max = parse_or(
            &lookup,
            "GCM_BACKOFF_MAX_MS",
            DEFAULT_MAX_DELAY.as_millis() as u64,
        )
        .map(Duration::from_millis)?;

        Ok(Self {
            api_key,
            retry_count,
            timeout,
            endpoint,
            backoff: Backoff::new(base, max),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
