//! Application-server client for the GCM HTTP send API.
//!
//! A [`Dispatcher`] posts a [`Message`] to the gateway and retries the
//! recipients reported as unavailable, with exponential backoff, until the
//! delivery completes, a fatal error occurs or the retry budget runs out.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use application::{
    handlers::dispatcher::{Attempt, Dispatcher, build_request},
    services::{
        backoff::Backoff,
        transport::{GatewayReply, GatewayRequest, Transport},
    },
};
pub use config::{ConfigError, DispatcherConfig, GCM_SEND_ENDPOINT};
pub use domain::{
    errors::{GatewayError, SendError, ValidationError},
    models::{DeliveryResult, ErrorCode, Message, Notification, Priority, Response},
};
pub use infrastructure::http::ReqwestTransport;
