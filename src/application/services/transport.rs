use async_trait::async_trait;
use reqwest::{Method, StatusCode, header::HeaderMap};

/// A fully built request, ready to be put on the wire.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Raw reply from the gateway, before any classification.
#[derive(Debug, Clone)]
pub struct GatewayReply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Executes a single request. Failing to reach the gateway at all is an
/// error; any HTTP status, including 5xx, is a reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: GatewayRequest) -> anyhow::Result<GatewayReply>;
}
