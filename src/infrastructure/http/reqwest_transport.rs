use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::trace;

use crate::application::services::transport::{GatewayReply, GatewayRequest, Transport};

/// [`Transport`] backed by a pooled reqwest client.
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> reqwest::Result<Arc<dyn Transport>> {
        let http = Client::builder()
            .user_agent("gcm-dispatch")
            .timeout(timeout)
            .build()?;
        Ok(Arc::new(Self { http }) as Arc<dyn Transport>)
    }

    pub fn with_client(http: Client) -> Arc<dyn Transport> {
        Arc::new(Self { http }) as Arc<dyn Transport>
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: GatewayRequest) -> anyhow::Result<GatewayReply> {
        trace!(url = %request.url, bytes = request.body.len(), "executing gateway request");

        let response = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(GatewayReply {
            status,
            headers,
            body,
        })
    }
}
