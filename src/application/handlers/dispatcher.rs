use std::sync::Arc;

use reqwest::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER},
};
use tracing::{debug, info, warn};

use crate::{
    application::services::{
        backoff::Backoff,
        transport::{GatewayReply, GatewayRequest, Transport},
    },
    config::DispatcherConfig,
    domain::{
        errors::{GatewayError, SendError},
        models::{Message, Response},
    },
    infrastructure::http::ReqwestTransport,
};

/// Backoff hint used when an overloaded gateway gives no `Retry-After`.
const DEFAULT_BACKOFF_HINT: u32 = 1;

/// Outcome of a single round trip that did not fail fatally.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// Every recipient was delivered without failures or canonical id
    /// changes.
    Delivered(Response),
    /// Delivery is incomplete. `response` is absent when the gateway was
    /// overloaded and sent no body.
    Retry {
        response: Option<Response>,
        backoff: u32,
    },
}

impl Attempt {
    /// Zero once delivery is complete, otherwise the exponent hint for the
    /// next delay.
    pub fn backoff_hint(&self) -> u32 {
        match self {
            Attempt::Delivered(_) => 0,
            Attempt::Retry { backoff, .. } => *backoff,
        }
    }

    pub fn response(&self) -> Option<&Response> {
        match self {
            Attempt::Delivered(response) => Some(response),
            Attempt::Retry { response, .. } => response.as_ref(),
        }
    }
}

/// Sends messages to the gateway on behalf of a single API key, retrying
/// recipients the gateway reports as temporarily unavailable.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Dispatcher {
    api_key: String,
    retry_count: u32,
    endpoint: String,
    backoff: Backoff,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            api_key: config.api_key,
            retry_count: config.retry_count,
            endpoint: config.endpoint,
            backoff: config.backoff,
            transport,
        }
    }

    /// Builds a dispatcher with a reqwest transport honouring
    /// `config.timeout`.
    pub fn from_config(config: DispatcherConfig) -> Result<Self, SendError> {
        let transport =
            ReqwestTransport::new(config.timeout).map_err(|e| SendError::Transport(e.into()))?;
        Ok(Self::new(config, transport))
    }

    /// Sends `message`, retrying unavailable recipients up to the configured
    /// retry count.
    ///
    /// Each retry is addressed only to the recipients the previous reply
    /// marked as unavailable. `message` itself is never modified. `Ok` is
    /// only returned for a reply that is fully ok; a reply whose failures
    /// leave nobody to retry ends with [`SendError::Undeliverable`].
    pub async fn send(&self, message: &Message) -> Result<Response, SendError> {
        let mut pending = message.clone();
        let mut last_known: Option<Response> = None;
        let mut retries = 0;

        loop {
            let backoff = match self.attempt(&pending).await? {
                Attempt::Delivered(response) => {
                    if retries > 0 {
                        info!(retries, "gcm delivery completed after retry");
                    }
                    return Ok(response);
                }
                Attempt::Retry { response, backoff } => {
                    if let Some(response) = response {
                        pending = pending.narrowed(&response);
                        if pending.registration_ids.is_empty() {
                            warn!(
                                failure = response.failure,
                                canonical_ids = response.canonical_ids,
                                "gcm reported failures that cannot be retried"
                            );
                            return Err(SendError::Undeliverable {
                                response: Box::new(response),
                            });
                        }
                        last_known = Some(response);
                    }
                    backoff
                }
            };

            if retries == self.retry_count {
                warn!(
                    retries,
                    pending = pending.registration_ids.len(),
                    "gcm retry limit exceeded"
                );
                return Err(SendError::RetryLimitExceeded {
                    retries,
                    recipients: pending.registration_ids,
                    response: last_known.map(Box::new),
                });
            }

            let delay = self.backoff.delay(backoff, retries);
            retries += 1;
            warn!(
                retry = retries,
                of = self.retry_count,
                recipients = pending.registration_ids.len(),
                ?delay,
                "gcm delivery incomplete, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Performs exactly one round trip and classifies the reply.
    pub async fn attempt(&self, message: &Message) -> Result<Attempt, SendError> {
        if self.api_key.is_empty() {
            return Err(SendError::Configuration("the sender's API key must not be empty"));
        }
        message.validate()?;

        let mut request = build_request(message, &self.endpoint)?;
        let authorization = HeaderValue::from_str(&format!("key={}", self.api_key)).map_err(|_| {
            SendError::Configuration("the sender's API key is not a valid header value")
        })?;
        request.headers.insert(AUTHORIZATION, authorization);

        debug!(
            endpoint = %self.endpoint,
            recipients = message.registration_ids.len(),
            "sending gcm request"
        );
        let reply = self
            .transport
            .execute(request)
            .await
            .map_err(SendError::Transport)?;

        classify(reply)
    }
}

/// Serializes `message` into a JSON POST for `endpoint`.
pub fn build_request(message: &Message, endpoint: &str) -> Result<GatewayRequest, SendError> {
    let body = serde_json::to_vec(message).map_err(SendError::Serialization)?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(GatewayRequest {
        method: Method::POST,
        url: endpoint.to_string(),
        headers,
        body,
    })
}

fn classify(reply: GatewayReply) -> Result<Attempt, SendError> {
    match reply.status.as_u16() {
        400 => Err(GatewayError::InvalidJson.into()),
        401 => Err(GatewayError::Authentication.into()),
        status @ 500..=599 => {
            let backoff = retry_after(&reply.headers).unwrap_or(DEFAULT_BACKOFF_HINT);
            warn!(status, backoff, "gcm gateway unavailable");
            Ok(Attempt::Retry {
                response: None,
                backoff,
            })
        }
        200..=299 => {
            let response: Response =
                serde_json::from_slice(&reply.body).map_err(SendError::Decode)?;
            classify_response(response)
        }
        status => Err(GatewayError::UnexpectedStatus(status).into()),
    }
}

fn classify_response(response: Response) -> Result<Attempt, SendError> {
    if !response.is_consistent() {
        warn!(
            success = response.success,
            failure = response.failure,
            canonical_ids = response.canonical_ids,
            results = response.results.len(),
            "gcm response counters disagree with results"
        );
    }

    if response.is_ok() {
        return Ok(Attempt::Delivered(response));
    }
    if let Some(code) = &response.error {
        return Err(GatewayError::Rejected(code.clone()).into());
    }
    debug!(
        failure = response.failure,
        canonical_ids = response.canonical_ids,
        "gcm delivery incomplete"
    );
    Ok(Attempt::Retry {
        response: Some(response),
        backoff: 1,
    })
}

fn retry_after(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u32>()
        .ok()
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex, time::Duration};

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        errors::ValidationError,
        models::{DeliveryResult, ErrorCode},
    };

    /// Replays canned replies and records every request it receives.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: Mutex<VecDeque<anyhow::Result<GatewayReply>>>,
        requests: Mutex<Vec<GatewayRequest>>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<anyhow::Result<GatewayReply>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                requests: Mutex::default(),
            })
        }

        fn requests(&self) -> Vec<GatewayRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn sent_ids(&self) -> Vec<Vec<String>> {
            self.requests()
                .iter()
                .map(|request| {
                    serde_json::from_slice::<Message>(&request.body)
                        .unwrap()
                        .registration_ids
                })
                .collect()
        }
    }

    #[async_trait]
    impl Transport for ScriptedTransport {
        async fn execute(&self, request: GatewayRequest) -> anyhow::Result<GatewayReply> {
            self.requests.lock().unwrap().push(request);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted reply left")))
        }
    }

    fn json_reply(body: serde_json::Value) -> anyhow::Result<GatewayReply> {
        Ok(GatewayReply {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: serde_json::to_vec(&body).unwrap(),
        })
    }

    fn status_reply(
        status: StatusCode,
        retry_after: Option<&'static str>,
    ) -> anyhow::Result<GatewayReply> {
        let mut headers = HeaderMap::new();
        if let Some(value) = retry_after {
            headers.insert(RETRY_AFTER, HeaderValue::from_static(value));
        }
        Ok(GatewayReply {
            status,
            headers,
            body: Vec::new(),
        })
    }

    fn unavailable_reply() -> anyhow::Result<GatewayReply> {
        json_reply(json!({ "failure": 1, "results": [{ "error": "Unavailable" }] }))
    }

    fn dispatcher(api_key: &str, retry_count: u32, transport: Arc<dyn Transport>) -> Dispatcher {
        let config = DispatcherConfig::new(api_key, retry_count, Duration::from_secs(60))
            .with_endpoint("http://gateway.test/send")
            .with_backoff(Backoff::new(Duration::from_millis(1), Duration::from_millis(5)));
        Dispatcher::new(config, transport)
    }

    fn message(ids: &[&str]) -> Message {
        let mut data = std::collections::HashMap::new();
        data.insert("key".to_string(), json!("value"));
        Message::new(data, ids.iter().copied())
    }

    #[tokio::test]
    async fn empty_api_key_is_a_configuration_error() {
        let transport = ScriptedTransport::new(vec![]);
        let sender = dispatcher("", 3, transport.clone());

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        assert!(matches!(err, SendError::Configuration(_)));

        let err = sender.send(&Message::default()).await.unwrap_err();
        assert!(matches!(err, SendError::Configuration(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn invalid_messages_never_reach_the_transport() {
        let transport = ScriptedTransport::new(vec![]);
        let sender = dispatcher("test", 3, transport.clone());

        let too_many = Message::new(Default::default(), vec![String::from("id"); 1001]);
        let err = sender.send(&too_many).await.unwrap_err();
        assert!(matches!(
            err,
            SendError::Validation(ValidationError::TooManyRecipients(1001))
        ));

        let negative = message(&["1"]).with_time_to_live(-1);
        assert!(matches!(
            sender.send(&negative).await.unwrap_err(),
            SendError::Validation(ValidationError::InvalidTimeToLive(-1))
        ));

        let too_long = message(&["1"]).with_time_to_live(2_419_201);
        assert!(matches!(
            sender.attempt(&too_long).await.unwrap_err(),
            SendError::Validation(ValidationError::InvalidTimeToLive(2_419_201))
        ));

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn attaches_credentials_and_json_body() {
        let transport = ScriptedTransport::new(vec![json_reply(json!({ "success": 1 }))]);
        let sender = dispatcher("test", 0, transport.clone());

        let response = sender.send(&message(&["1"])).await.unwrap();
        assert_eq!(response.success, 1);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "http://gateway.test/send");
        assert_eq!(request.headers[AUTHORIZATION], "key=test");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(
            body,
            json!({ "registration_ids": ["1"], "data": { "key": "value" } })
        );
    }

    #[tokio::test]
    async fn bad_request_is_fatal_without_retry() {
        let transport = ScriptedTransport::new(vec![status_reply(StatusCode::BAD_REQUEST, None)]);
        let sender = dispatcher("test", 3, transport.clone());

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        assert!(matches!(err, SendError::Gateway(GatewayError::InvalidJson)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn unauthorized_and_unknown_statuses_are_fatal() {
        let transport = ScriptedTransport::new(vec![
            status_reply(StatusCode::UNAUTHORIZED, None),
            status_reply(StatusCode::NOT_FOUND, None),
        ]);
        let sender = dispatcher("test", 3, transport);

        assert!(matches!(
            sender.attempt(&message(&["1"])).await.unwrap_err(),
            SendError::Gateway(GatewayError::Authentication)
        ));
        assert!(matches!(
            sender.attempt(&message(&["1"])).await.unwrap_err(),
            SendError::Gateway(GatewayError::UnexpectedStatus(404))
        ));
    }

    #[tokio::test]
    async fn transport_failures_are_not_retried() {
        let transport =
            ScriptedTransport::new(vec![Err(anyhow::anyhow!("connection refused"))]);
        let sender = dispatcher("test", 3, transport.clone());

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        assert!(matches!(err, SendError::Transport(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn undecodable_body_is_fatal() {
        let transport = ScriptedTransport::new(vec![Ok(GatewayReply {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: b"not json".to_vec(),
        })]);
        let sender = dispatcher("test", 3, transport);

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        assert!(matches!(err, SendError::Decode(_)));
    }

    #[tokio::test]
    async fn top_level_error_is_fatal() {
        let transport = ScriptedTransport::new(vec![json_reply(
            json!({ "error": "TopicsMessageRateExceeded" }),
        )]);
        let sender = dispatcher("test", 3, transport.clone());

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        assert!(matches!(
            err,
            SendError::Gateway(GatewayError::Rejected(ErrorCode::TopicsMessageRateExceeded))
        ));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn overload_reply_uses_retry_after_as_hint() {
        let transport = ScriptedTransport::new(vec![
            status_reply(StatusCode::INTERNAL_SERVER_ERROR, Some("2")),
            status_reply(StatusCode::SERVICE_UNAVAILABLE, None),
            status_reply(StatusCode::SERVICE_UNAVAILABLE, Some("soon")),
        ]);
        let sender = dispatcher("test", 0, transport);

        let attempt = sender.attempt(&message(&["1"])).await.unwrap();
        assert_eq!(attempt.backoff_hint(), 2);
        assert_eq!(attempt.response(), None);

        let attempt = sender.attempt(&message(&["1"])).await.unwrap();
        assert_eq!(attempt.backoff_hint(), 1);

        let attempt = sender.attempt(&message(&["1"])).await.unwrap();
        assert_eq!(attempt.backoff_hint(), 1);
    }

    #[tokio::test]
    async fn full_success_needs_no_backoff() {
        let transport = ScriptedTransport::new(vec![json_reply(
            json!({ "success": 1, "results": [{ "message_id": "id" }] }),
        )]);
        let sender = dispatcher("test", 0, transport);

        let attempt = sender.attempt(&message(&["1"])).await.unwrap();
        assert_eq!(attempt.backoff_hint(), 0);
        assert!(matches!(attempt, Attempt::Delivered(_)));
    }

    #[tokio::test]
    async fn one_retry_then_success() {
        let transport = ScriptedTransport::new(vec![
            unavailable_reply(),
            json_reply(json!({ "success": 1, "results": [{ "message_id": "id" }] })),
        ]);
        let sender = dispatcher("test", 1, transport.clone());

        let response = sender.send(&message(&["1"])).await.unwrap();
        assert_eq!(response.failure, 0);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn retry_limit_exceeded_keeps_last_response() {
        let transport = ScriptedTransport::new(vec![unavailable_reply(), unavailable_reply()]);
        let sender = dispatcher("test", 1, transport.clone());

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        match &err {
            SendError::RetryLimitExceeded {
                retries,
                recipients,
                response,
            } => {
                assert_eq!(*retries, 1);
                assert_eq!(recipients, &vec!["1".to_string()]);
                assert_eq!(response.as_ref().map(|r| r.failure), Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.response().map(|r| r.failure), Some(1));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn fatal_reply_on_retry_short_circuits() {
        let transport = ScriptedTransport::new(vec![
            unavailable_reply(),
            status_reply(StatusCode::BAD_REQUEST, None),
            json_reply(json!({ "success": 1 })),
        ]);
        let sender = dispatcher("test", 3, transport.clone());

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        assert!(matches!(err, SendError::Gateway(GatewayError::InvalidJson)));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn overload_then_success() {
        let transport = ScriptedTransport::new(vec![
            status_reply(StatusCode::INTERNAL_SERVER_ERROR, Some("2")),
            json_reply(json!({ "failure": 0 })),
        ]);
        let sender = dispatcher("test", 1, transport.clone());

        sender.send(&message(&["1"])).await.unwrap();
        assert_eq!(transport.sent_ids(), vec![vec!["1"], vec!["1"]]);
    }

    #[tokio::test]
    async fn retries_only_unavailable_recipients() {
        let transport = ScriptedTransport::new(vec![
            json_reply(json!({
                "success": 1,
                "failure": 3,
                "results": [
                    { "message_id": "m1" },
                    { "error": "Unavailable" },
                    { "error": "Unavailable" },
                    { "error": "NotRegistered" }
                ]
            })),
            status_reply(StatusCode::SERVICE_UNAVAILABLE, None),
            json_reply(json!({
                "success": 1,
                "failure": 1,
                "results": [{ "error": "Unavailable" }, { "message_id": "m3" }]
            })),
            json_reply(json!({ "success": 1, "results": [{ "message_id": "m2" }] })),
        ]);
        let sender = dispatcher("test", 3, transport.clone());
        let original = message(&["A", "B", "C", "D"]);

        let response = sender.send(&original).await.unwrap();
        assert_eq!(response.results, vec![DeliveryResult {
            message_id: Some("m2".to_string()),
            ..Default::default()
        }]);
        assert_eq!(
            transport.sent_ids(),
            vec![
                vec!["A", "B", "C", "D"],
                vec!["B", "C"],
                vec!["B", "C"],
                vec!["B"],
            ]
        );
        assert_eq!(original.registration_ids, vec!["A", "B", "C", "D"]);
    }

    #[tokio::test]
    async fn permanent_failures_alone_end_without_retry() {
        let transport = ScriptedTransport::new(vec![json_reply(json!({
            "success": 1,
            "failure": 1,
            "canonical_ids": 1,
            "results": [
                { "message_id": "m1", "registration_id": "new" },
                { "error": "InvalidRegistration" }
            ]
        }))]);
        let sender = dispatcher("test", 3, transport.clone());
        let original = message(&["old", "bad"]);

        let err = sender.send(&original).await.unwrap_err();
        assert!(matches!(err, SendError::Undeliverable { .. }));
        let response = err.response().unwrap();
        assert_eq!(
            response.canonical_changes(&original.registration_ids),
            vec![("old", "new")]
        );
        assert_eq!(
            response.stale_registrations(&original.registration_ids),
            vec!["bad"]
        );
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn unregistered_recipient_is_never_reported_as_success() {
        let not_registered = json!({ "failure": 1, "results": [{ "error": "NotRegistered" }] });
        let transport = ScriptedTransport::new(vec![
            json_reply(not_registered.clone()),
            json_reply(not_registered),
        ]);
        let sender = dispatcher("test", 1, transport.clone());

        let attempt = sender.attempt(&message(&["1"])).await.unwrap();
        assert_eq!(attempt.backoff_hint(), 1);

        let err = sender.send(&message(&["1"])).await.unwrap_err();
        assert_eq!(err.response().map(|r| r.failure), Some(1));
        assert!(matches!(err, SendError::Undeliverable { .. }));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn canonical_change_alone_is_not_ok() {
        let transport = ScriptedTransport::new(vec![json_reply(json!({
            "success": 1,
            "canonical_ids": 1,
            "results": [{ "message_id": "m1", "registration_id": "new" }]
        }))]);
        let sender = dispatcher("test", 2, transport.clone());

        let err = sender.send(&message(&["old"])).await.unwrap_err();
        assert_eq!(err.response().map(|r| r.canonical_ids), Some(1));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn no_retry_budget_reports_unavailable_recipients() {
        let transport = ScriptedTransport::new(vec![unavailable_reply()]);
        let sender = dispatcher("test", 0, transport.clone());

        match sender.send(&message(&["1"])).await.unwrap_err() {
            SendError::RetryLimitExceeded {
                retries,
                recipients,
                ..
            } => {
                assert_eq!(retries, 0);
                assert_eq!(recipients, vec!["1"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    /// Answers every request with a success per recipient, tagged with the
    /// recipient's id, so concurrent sends can be told apart.
    struct EchoTransport;

    #[async_trait]
    impl Transport for EchoTransport {
        async fn execute(&self, request: GatewayRequest) -> anyhow::Result<GatewayReply> {
            let message: Message = serde_json::from_slice(&request.body)?;
            tokio::task::yield_now().await;
            let results: Vec<_> = message
                .registration_ids
                .iter()
                .map(|id| json!({ "message_id": format!("m-{id}") }))
                .collect();
            json_reply(json!({ "success": results.len(), "results": results }))
        }
    }

    #[tokio::test]
    async fn concurrent_sends_on_shared_dispatcher_do_not_interfere() {
        let sender = dispatcher("test", 0, Arc::new(EchoTransport));
        let other = sender.clone();
        let first = message(&["a1", "a2"]);
        let second = message(&["b1", "b2", "b3"]);

        let (a, b) = tokio::join!(sender.send(&first), other.send(&second));
        let ids = |response: Response| -> Vec<String> {
            response
                .results
                .into_iter()
                .filter_map(|result| result.message_id)
                .collect()
        };
        assert_eq!(ids(a.unwrap()), vec!["m-a1", "m-a2"]);
        assert_eq!(ids(b.unwrap()), vec!["m-b1", "m-b2", "m-b3"]);
        assert_eq!(first.registration_ids, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn exhausted_after_overload_reports_pending_recipients() {
        let transport = ScriptedTransport::new(vec![
            json_reply(json!({
                "success": 1,
                "failure": 1,
                "results": [{ "message_id": "m1" }, { "error": "Unavailable" }]
            })),
            status_reply(StatusCode::SERVICE_UNAVAILABLE, Some("1")),
        ]);
        let sender = dispatcher("test", 1, transport);

        let err = sender.send(&message(&["A", "B"])).await.unwrap_err();
        match err {
            SendError::RetryLimitExceeded {
                recipients,
                response,
                ..
            } => {
                assert_eq!(recipients, vec!["B"]);
                assert_eq!(response.map(|r| r.success), Some(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
