use std::collections::HashMap;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gcm_dispatch::{
    Dispatcher, DispatcherConfig, Message, Notification, Priority, SendError, logging::init_logging,
};
use serde_json::Value;
use tokio::main;
use tracing::{error, info};

/// Send a push message to one or more registration ids.
///
/// Credentials and retry policy are read from the environment
/// (GCM_API_KEY, GCM_RETRY_COUNT, GCM_TIMEOUT_SECS, GCM_ENDPOINT, ...).
#[derive(Debug, Parser)]
#[command(name = "gcm-send", version)]
struct Args {
    /// Registration ids to deliver to
    #[arg(required = true)]
    registration_ids: Vec<String>,

    /// Data entry as key=value; the value is parsed as JSON when possible
    #[arg(long = "data", value_name = "KEY=VALUE")]
    data: Vec<String>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    body: Option<String>,

    #[arg(long)]
    collapse_key: Option<String>,

    /// Time to live in seconds
    #[arg(long, allow_negative_numbers = true)]
    ttl: Option<i64>,

    #[arg(long, value_enum)]
    priority: Option<PriorityArg>,

    #[arg(long)]
    dry_run: bool,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PriorityArg {
    Normal,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Normal => Priority::Normal,
            PriorityArg::High => Priority::High,
        }
    }
}

fn parse_data(entries: &[String]) -> anyhow::Result<HashMap<String, Value>> {
    let mut data = HashMap::new();
    for entry in entries {
        let (key, raw) = entry
            .split_once('=')
            .with_context(|| format!("data entry {entry:?} is not KEY=VALUE"))?;
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        data.insert(key.to_string(), value);
    }
    Ok(data)
}

fn build_message(args: &Args) -> anyhow::Result<Message> {
    let mut message = Message::new(parse_data(&args.data)?, args.registration_ids.iter().cloned())
        .dry_run(args.dry_run);

    if args.title.is_some() || args.body.is_some() {
        message = message.with_notification(Notification {
            title: args.title.clone(),
            body: args.body.clone(),
            ..Default::default()
        });
    }
    if let Some(key) = &args.collapse_key {
        message = message.with_collapse_key(key.clone());
    }
    if let Some(ttl) = args.ttl {
        message = message.with_time_to_live(ttl);
    }
    if let Some(priority) = args.priority {
        message = message.with_priority(priority.into());
    }
    Ok(message)
}

#[main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, args.log_json)?;

    let config = DispatcherConfig::from_env()?;
    let dispatcher = Dispatcher::from_config(config)?;
    let message = build_message(&args)?;

    info!(recipients = message.registration_ids.len(), "sending message");

    match dispatcher.send(&message).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(err) => {
            if let SendError::RetryLimitExceeded { recipients, .. } = &err {
                error!(pending = ?recipients, "delivery incomplete");
            }
            if let Some(response) = err.response() {
                println!("{}", serde_json::to_string_pretty(response)?);
            }
            Err(err.into())
        }
    }
}
