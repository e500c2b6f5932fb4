//! GlitchTip REST API client
//!
//! [`ApiClient::call`] is the only place that looks at HTTP status codes:
//! every 2xx body is parsed as JSON and returned untouched, every other
//! status becomes [`GlitchTipError::Api`] carrying the status and the body
//! text verbatim.

#[cfg(any(test, feature = "test-utils"))]
pub mod mock_transport;
pub mod transport;
pub mod types;

pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
pub use types::{Event, EventTag, Issue, Organization, Project};

use crate::config::GlitchTipConfig;
use crate::error::{GlitchTipError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Optional parts of a request: method, body and extra headers
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Option<Method>,
    body: Option<String>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// GET with no body and no extra headers
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `method` instead of GET
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Send `body` verbatim
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as JSON
    pub fn json_body<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        Ok(self.body(serde_json::to_string(body)?))
    }

    /// Add a header; it replaces any default header with the same name
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GlitchTipError::Other(format!("Invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GlitchTipError::Other(format!("Invalid value for header '{name}': {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

/// Authenticated client for `{base_url}/api/0`
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<GlitchTipConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client that talks HTTP through reqwest
    pub fn new(config: Arc<GlitchTipConfig>) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client on top of any transport
    pub fn with_transport(config: Arc<GlitchTipConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &GlitchTipConfig {
        &self.config
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.config.token()))
            .map_err(|_| {
                GlitchTipError::Config(
                    "API token contains characters that are not allowed in an HTTP header"
                        .to_string(),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Call `endpoint` (relative to the API root) and return the JSON body.
    ///
    /// # Errors
    ///
    /// * [`GlitchTipError::Api`] for any non-2xx status
    /// * [`GlitchTipError::InvalidResponse`] when a 2xx body is not JSON
    /// * whatever the transport reports when no response arrives at all
    pub async fn call(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        let method = options.method.unwrap_or(Method::GET);

        let mut headers = self.default_headers()?;
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let request = ApiRequest {
            method: method.clone(),
            url: self.config.endpoint_url(endpoint),
            headers,
            body: options.body,
        };

        tracing::debug!("GlitchTip API {} {}", method, endpoint);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            tracing::warn!(
                "GlitchTip API {} {} returned {}",
                method,
                endpoint,
                response.status
            );
            return Err(GlitchTipError::Api {
                status: response.status,
                body: response.body,
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&response.body).map_err(|e| GlitchTipError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }

    /// GET `endpoint` and return the raw JSON
    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        self.call(endpoint, RequestOptions::new()).await
    }

    /// GET `endpoint` and decode it into `T`
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let value = self.get(endpoint).await?;
        decode(endpoint, value)
    }

    /// PUT `body` as JSON to `endpoint`
    pub async fn put_json<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value> {
        let options = RequestOptions::new().method(Method::PUT).json_body(body)?;
        self.call(endpoint, options).await
    }
}

/// Decode a JSON body into `T`, naming the endpoint on failure
pub fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| GlitchTipError::InvalidResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
