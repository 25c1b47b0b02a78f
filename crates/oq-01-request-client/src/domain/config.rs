//! Client configuration from environment variables.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ClientError;

/// Default base URL of the QA service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Default path of the question endpoint.
pub const DEFAULT_QA_PATH: &str = "/qa";

/// Where and how to reach the QA service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and optional prefix, e.g. `http://localhost:8080`
    pub base_url: String,

    /// Path appended to `base_url`, must start with `/`
    pub path: String,

    /// Whole-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            path: DEFAULT_QA_PATH.to_string(),
            request_timeout: None,
            user_agent: format!("oq-request-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OQ_ENDPOINT`: Base URL (default: http://localhost:8080)
    /// - `OQ_QA_PATH`: Question endpoint path (default: /qa)
    /// - `OQ_TIMEOUT_SECS`: Request timeout in seconds (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("OQ_ENDPOINT").unwrap_or(defaults.base_url),
            path: lookup("OQ_QA_PATH").unwrap_or(defaults.path),
            request_timeout: lookup("OQ_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            user_agent: defaults.user_agent,
        }
    }

    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Check that the endpoint can be built and the timeout is usable.
    pub fn validate(&self) -> Result<(), ClientError> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("base URL {:?}: {}", self.base_url, e))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "base URL must use http or https, got {}",
                base.scheme()
            )));
        }
        if !self.path.starts_with('/') {
            return Err(ClientError::InvalidConfig(format!(
                "path must start with '/', got {:?}",
                self.path
            )));
        }
        if self.request_timeout == Some(Duration::ZERO) {
            return Err(ClientError::InvalidConfig(
                "request timeout cannot be 0".into(),
            ));
        }
        Ok(())
    }

    /// The full question endpoint: `base_url` followed by `path`.
    pub fn endpoint_url(&self) -> Result<Url, ClientError> {
        self.validate()?;
        let joined = format!("{}{}", self.base_url.trim_end_matches('/'), self.path);
        Url::parse(&joined)
            .map_err(|e| ClientError::InvalidConfig(format!("endpoint {joined:?}: {e}")))
    }
}

/// Builder for [`ClientConfig`], starting from the defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.path = path.into();
        self
    }

    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<ClientConfig, ClientError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
