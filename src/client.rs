//! Signer API client.
//!
//! [`Client`] is the shared handle every resource gateway is built from. It
//! owns nothing but an `Arc` to the [`Transport`], so cloning it is cheap.

use crate::documents::DocumentsApi;
use crate::error::{ErrorCode, Result, SignerError};
use crate::flows::FlowsApi;
use crate::folders::FoldersApi;
use crate::marks::MarksSessionsApi;
use crate::notifications::NotificationsApi;
use crate::orgs::OrganizationsApi;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::types::ErrorModel;
use crate::uploads::UploadsApi;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "SIGNER_API_KEY";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SIGNER_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "SIGNER_TIMEOUT_SECS";

/// Signer API client.
///
/// # Example
///
/// ```rust,no_run
/// use lacuna_signer::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("your-app|xxxxxxxx")?;
///
///     let document = client.documents().get("3b0f6a6e-...").await?;
///     println!("{:?}: {:?}", document.name, document.status);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://signer-lac.azurewebsites.net).
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Read overrides from `SIGNER_BASE_URL` and `SIGNER_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`SignerError::Config`] if the timeout is not a whole number.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty());
        let timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) if !raw.is_empty() => {
                let secs: u64 = raw.parse().map_err(|_| {
                    SignerError::Config(format!("{TIMEOUT_ENV} must be a number of seconds, got {raw:?}"))
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            base_url,
            timeout,
            user_agent: None,
        })
    }
}

impl Client {
    /// Create a new client with default configuration.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your API key, in the form `your-app|xxxxxxxx`
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use lacuna_signer::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("your-app|xxxxxxxx", ClientConfig {
    ///     base_url: Some("https://signer.example.com".to_string()),
    ///     timeout: Some(Duration::from_secs(60)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    /// })?;
    /// # Ok::<(), lacuna_signer::SignerError>(())
    /// ```
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(api_key, config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn documents(&self) -> DocumentsApi {
        DocumentsApi::new(self.clone())
    }

    pub fn flows(&self) -> FlowsApi {
        FlowsApi::new(self.clone())
    }

    pub fn folders(&self) -> FoldersApi {
        FoldersApi::new(self.clone())
    }

    pub fn uploads(&self) -> UploadsApi {
        UploadsApi::new(self.clone())
    }

    pub fn notifications(&self) -> NotificationsApi {
        NotificationsApi::new(self.clone())
    }

    pub fn organizations(&self) -> OrganizationsApi {
        OrganizationsApi::new(self.clone())
    }

    pub fn marks_sessions(&self) -> MarksSessionsApi {
        MarksSessionsApi::new(self.clone())
    }

    /// Release the transport. Later requests through any clone fail.
    pub(crate) fn close(&self) {
        self.transport.close();
    }

    /// Make a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, Vec::new()).await
    }

    /// Make a GET request with query parameters and decode the JSON response.
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::GET, path).with_query(query);
        let response = self.execute(request).await?;
        decode(path, &response.body)
    }

    /// Make a GET request and return the raw body.
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<u8>> {
        let request = ApiRequest::new(Method::GET, path).with_query(query);
        Ok(self.execute(request).await?.body)
    }

    /// Make a POST request and decode the JSON response.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.send_json(Method::POST, path, body).await?;
        decode(path, &response.body)
    }

    /// Make a POST request whose response body is ignored.
    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.send_json(Method::POST, path, body).await?;
        Ok(())
    }

    /// Make a PUT request and decode the JSON response.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self.send_json(Method::PUT, path, body).await?;
        decode(path, &response.body)
    }

    /// Make a PUT request whose response body is ignored.
    pub(crate) async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.send_json(Method::PUT, path, body).await?;
        Ok(())
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(ApiRequest::new(Method::DELETE, path)).await?;
        Ok(())
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(body)
            .map_err(|e| SignerError::Encode(format!("{path}: {e}")))?;
        self.execute(ApiRequest::new(method, path).with_body(body))
            .await
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(parse_error(&response))
        }
    }
}

/// Turn a query struct into ordered `key=value` pairs, dropping absent fields.
pub(crate) fn query_pairs<Q: Serialize>(query: &Q) -> Result<Vec<(String, String)>> {
    let value =
        serde_json::to_value(query).map_err(|e| SignerError::Encode(format!("query: {e}")))?;

    let serde_json::Value::Object(fields) = value else {
        return Ok(Vec::new());
    };

    Ok(fields
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}

fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| SignerError::Decode(format!("{path}: {e}")))
}

fn parse_error(response: &ApiResponse) -> SignerError {
    let status = response.status;
    let body = serde_json::from_slice::<ErrorModel>(&response.body).ok();

    match (status, body) {
        (401, body) => {
            let (code, message) = code_and_message(body);
            SignerError::Unauthorized { code, message }
        }
        (403, body) => {
            let (code, message) = code_and_message(body);
            SignerError::Forbidden { code, message }
        }
        (
            _,
            Some(ErrorModel {
                code: Some(code),
                message,
                ..
            }),
        ) => SignerError::Api {
            code: ErrorCode::from(code),
            message: message.unwrap_or_default(),
            status_code: status,
        },
        _ => SignerError::Api {
            code: ErrorCode::Other("Unknown".to_string()),
            message: String::from_utf8_lossy(&response.body).into_owned(),
            status_code: status,
        },
    }
}

fn code_and_message(body: Option<ErrorModel>) -> (Option<ErrorCode>, Option<String>) {
    match body {
        Some(model) => (model.code.map(ErrorCode::from), model.message),
        None => (None, None),
    }
}
