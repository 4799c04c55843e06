//! Outbound HTTP port
//!
//! A single GET returning the status and body bytes. Timeouts and TLS belong
//! to the implementation; callers see only transport success or failure.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A GET request: endpoint URL plus query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Endpoint URL without query string
    pub url: String,
    /// Query parameters, in order
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Create a request without query parameters
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    /// Append a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Look up the first value of a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Response received from the remote endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port for outbound HTTP GET requests
///
/// Any response that arrives, whatever its status, is `Ok`. Only transport
/// failures (DNS, connection, timeout, body read) are errors, reported as
/// `ApplicationError::ExternalService`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    /// Perform a GET request
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_parameter_order() {
        let request = HttpRequest::get("https://example.com/data")
            .param("a", 1)
            .param("b", "two");
        assert_eq!(
            request.query,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "two".to_string())
            ]
        );
        assert_eq!(request.query_value("b"), Some("two"));
        assert_eq!(request.query_value("c"), None);
    }

    #[test]
    fn success_range() {
        let ok = HttpResponse {
            status: 204,
            body: Vec::new(),
        };
        let err = HttpResponse {
            status: 401,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }

    #[tokio::test]
    async fn transport_failure_is_returned_without_retry() {
        let mut mock = MockHttpClientPort::new();
        mock.expect_get()
            .withf(|request| request.query_value("appid") == Some("key"))
            .times(1)
            .returning(|_| Err(ApplicationError::ExternalService("refused".into())));

        let request = HttpRequest::get("http://localhost").param("appid", "key");
        let result = mock.get(&request).await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn error_status_is_a_response() {
        let mut mock = MockHttpClientPort::new();
        mock.expect_get().times(1).returning(|_| {
            Ok(HttpResponse {
                status: 401,
                body: br#"{"cod":401}"#.to_vec(),
            })
        });

        let response = mock.get(&HttpRequest::get("http://localhost")).await.unwrap();
        assert!(!response.is_success());
        assert_eq!(response.body, br#"{"cod":401}"#);
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn HttpClientPort>();
    }
}
