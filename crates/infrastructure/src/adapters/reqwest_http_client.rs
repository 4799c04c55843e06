//! HTTP transport backed by `reqwest`
//!
//! Implements [`HttpClientPort`] with a shared `reqwest::Client`. Timeouts
//! are configured on the client; callers only see the response or a
//! transport error.

use std::time::Duration;

use application::{
    error::ApplicationError,
    ports::{HttpClientPort, HttpRequest, HttpResponse},
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
            user_agent: format!("owm-conditions/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the user agent string
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// `reqwest`-based implementation of [`HttpClientPort`]
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    inner: Client,
    config: HttpClientConfig,
}

impl ReqwestHttpClient {
    /// Create a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be built.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reqwest client cannot be built.
    pub fn with_config(config: HttpClientConfig) -> Result<Self, ApplicationError> {
        let inner = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApplicationError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { inner, config })
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttpClient {
    // The query carries the API key, so only the endpoint is recorded.
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApplicationError> {
        let response = self
            .inner
            .get(&request.url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| {
                ApplicationError::ExternalService(format!("Request failed: {}", e.without_url()))
            })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            ApplicationError::ExternalService(format!(
                "Failed to read response body: {}",
                e.without_url()
            ))
        })?;

        debug!(status, bytes = body.len(), "HTTP response received");
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
