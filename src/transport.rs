//! Transport layer.
//!
//! A [`Transport`] turns one [`ApiRequest`] into one [`ApiResponse`]. The
//! default implementation, [`HttpTransport`], sends requests over HTTPS with
//! the `X-Api-Key` header. Tests and embedders can supply their own.

use crate::client::ClientConfig;
use crate::error::{Result, SignerError};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, Method};
use std::fmt;
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

/// Header carrying the API key, formatted as `issuer|secret`.
pub const API_KEY_HEADER: &str = "X-Api-Key";

pub(crate) const DEFAULT_BASE_URL: &str = "https://signer-lac.azurewebsites.net";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A request to the Signer API, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/api/`.
    pub path: String,
    /// Query parameters, in order.
    pub query: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Replace the query parameters.
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// A raw response: status code and body bytes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues requests against the Signer API.
///
/// Implementations perform exactly one round trip per `send` and never retry.
/// Non-success statuses are returned as responses, not errors; only failures
/// to obtain a response at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;

    /// Release the underlying resources. Sends after `close` fail.
    fn close(&self) {}
}

/// HTTPS transport backed by `reqwest`.
///
/// Closing drops the transport's handle to the connection pool; the pool
/// itself shuts down once no in-flight request still holds a clone of it.
pub struct HttpTransport {
    http: RwLock<Option<HttpClient>>,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    /// Build a transport for the given API key and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("lacuna-signer-rust/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http: RwLock::new(Some(http)),
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_closed(&self) -> bool {
        self.http_client().is_none()
    }

    fn http_client(&self) -> Option<HttpClient> {
        self.http
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let http = self.http_client().ok_or(SignerError::Closed)?;

        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = http
            .request(request.method.clone(), &url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!(
            method = %request.method,
            path = %request.path,
            status,
            "Signer API request completed"
        );

        Ok(ApiResponse { status, body })
    }

    fn close(&self) {
        let released = self
            .http
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if released.is_some() {
            debug!(base_url = %self.base_url, "Signer transport released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let transport = HttpTransport::new("app|secret", ClientConfig::default()).unwrap();
        assert_eq!(transport.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::new(
            "app|secret",
            ClientConfig {
                base_url: Some("https://signer.example.com/".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(transport.base_url(), "https://signer.example.com");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let transport = HttpTransport::new("app|very-secret", ClientConfig::default()).unwrap();
        let debug = format!("{:?}", transport);
        assert!(!debug.contains("very-secret"));
    }

    #[tokio::test]
    async fn test_send_after_close_fails() {
        let transport = HttpTransport::new("app|secret", ClientConfig::default()).unwrap();
        transport.close();
        assert!(transport.is_closed());

        let result = transport
            .send(ApiRequest::new(Method::GET, "/api/folders"))
            .await;
        assert!(matches!(result, Err(SignerError::Closed)));
    }

    #[test]
    fn test_close_drops_http_client_once() {
        let transport = HttpTransport::new("app|secret", ClientConfig::default()).unwrap();
        assert!(transport.http.read().unwrap().is_some());

        transport.close();
        transport.close();
        assert!(transport.http.read().unwrap().is_none());
        assert!(transport.is_closed());
    }

    #[test]
    fn test_response_success_range() {
        assert!(ApiResponse::new(204, Vec::new()).is_success());
        assert!(!ApiResponse::new(422, b"{}".to_vec()).is_success());
    }
}
