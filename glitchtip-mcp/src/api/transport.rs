//! HTTP transport seam for the API client
//!
//! The client builds fully-formed [`ApiRequest`]s and hands them to an
//! [`HttpTransport`]. Production code uses [`ReqwestTransport`]; tests swap
//! in `MockTransport` (feature `test-utils`).

use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;

/// A request ready to be put on the wire
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, including the query string
    pub url: String,
    /// Final header set, defaults already merged with caller headers
    pub headers: HeaderMap,
    /// Request body, already serialized
    pub body: Option<String>,
}

/// Raw response: status plus body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Body as text
    pub body: String,
}

impl ApiResponse {
    /// Create a response from a status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations must not interpret the status code: a 404 is a successful
/// exchange at this level. Only failures to get any response are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request and collect the response body
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default client settings
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}
