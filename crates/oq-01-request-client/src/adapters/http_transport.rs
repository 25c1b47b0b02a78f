//! HTTP transport for the QA service.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::{ClientConfig, QuestionRequest};
use crate::error::ClientError;
use crate::ports::{QaTransport, RawResponse};

/// POSTs questions as JSON to `{base_url}{path}`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport for `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let endpoint = config.endpoint_url()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl QaTransport for HttpTransport {
    async fn post_question(&self, request: &QuestionRequest) -> Result<RawResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::transport(&self.endpoint, &e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::transport(&self.endpoint, &e))?;
        debug!(status, bytes = body.len(), "QA response read");

        Ok(RawResponse { status, body })
    }

    fn endpoint(&self) -> String {
        self.endpoint.to_string()
    }
}
