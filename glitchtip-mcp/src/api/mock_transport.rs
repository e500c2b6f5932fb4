//! In-memory transport for tests
//!
//! `MockTransport` answers requests from a list of scripted routes and keeps
//! every request it received, so tests can assert on method, URL, headers
//! and body without a running GlitchTip server.
//!
//! ```ignore
//! use glitchtip_mcp::api::mock_transport::MockTransport;
//! use reqwest::Method;
//!
//! let (client, transport) = MockTransport::client();
//! transport.respond(Method::GET, "/organizations/", 200, r#"[{"name":"Acme","slug":"acme"}]"#);
//! let orgs = client.get("/organizations/").await?;
//! assert_eq!(transport.requests()[0].method, Method::GET);
//! ```

use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use super::ApiClient;
use crate::config::GlitchTipConfig;
use crate::error::{GlitchTipError, Result};
use async_trait::async_trait;
use reqwest::Method;
use std::sync::{Arc, Mutex, MutexGuard};

/// Base URL every mock client points at
pub const MOCK_BASE_URL: &str = "http://glitchtip.test";

/// Token every mock client sends
pub const MOCK_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
enum MockReply {
    Response(ApiResponse),
    Failure(String),
}

#[derive(Debug, Clone)]
struct MockRoute {
    method: Method,
    url: String,
    reply: MockReply,
}

/// Scripted [`HttpTransport`] that records requests
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<Vec<MockRoute>>,
    requests: Mutex<Vec<ApiRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    /// Create a transport with no routes
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at [`MOCK_BASE_URL`]
    pub fn config() -> GlitchTipConfig {
        GlitchTipConfig::new(MOCK_BASE_URL, MOCK_TOKEN)
            .unwrap_or_else(|e| panic!("mock configuration must be valid: {e}"))
    }

    /// An API client wired to a fresh mock transport
    pub fn client() -> (ApiClient, Arc<MockTransport>) {
        let transport = Arc::new(Self::new());
        let client = ApiClient::with_transport(Arc::new(Self::config()), transport.clone());
        (client, transport)
    }

    /// Answer `method endpoint` with `status` and `body`.
    ///
    /// `endpoint` is relative to the API root, query string included, e.g.
    /// `/issues/42/events/?limit=3`. The first matching route wins.
    pub fn respond(&self, method: Method, endpoint: &str, status: u16, body: impl Into<String>) {
        lock(&self.routes).push(MockRoute {
            method,
            url: format!("{MOCK_BASE_URL}/api/0{endpoint}"),
            reply: MockReply::Response(ApiResponse::new(status, body)),
        });
    }

    /// Answer `GET endpoint` with a 200 and the given JSON
    pub fn respond_json(&self, endpoint: &str, body: serde_json::Value) {
        self.respond(Method::GET, endpoint, 200, body.to_string());
    }

    /// Make `method endpoint` fail without any response, like a refused connection
    pub fn fail(&self, method: Method, endpoint: &str, reason: impl Into<String>) {
        lock(&self.routes).push(MockRoute {
            method,
            url: format!("{MOCK_BASE_URL}/api/0{endpoint}"),
            reply: MockReply::Failure(reason.into()),
        });
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// URLs of every request received so far, relative to the API root
    pub fn request_paths(&self) -> Vec<String> {
        let root = format!("{MOCK_BASE_URL}/api/0");
        lock(&self.requests)
            .iter()
            .map(|r| r.url.strip_prefix(&root).unwrap_or(&r.url).to_string())
            .collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let reply = lock(&self.routes)
            .iter()
            .find(|route| route.method == request.method && route.url == request.url)
            .map(|route| route.reply.clone());

        let description = format!("{} {}", request.method, request.url);
        lock(&self.requests).push(request);

        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(reason)) => Err(GlitchTipError::Other(reason)),
            None => Err(GlitchTipError::Other(format!(
                "no mock route for {description}"
            ))),
        }
    }
}
