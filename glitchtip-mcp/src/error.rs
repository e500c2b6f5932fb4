//! Unified error handling for the GlitchTip MCP library
//!
//! Every failure a tool can hit on its way to the GlitchTip API is expressed
//! as a [`GlitchTipError`]. Tools never inspect HTTP status codes themselves;
//! the API client turns every non-2xx response into [`GlitchTipError::Api`].

use thiserror::Error;

/// The main error type for the GlitchTip MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GlitchTipError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API answered with a non-success status
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Response body, verbatim
        body: String,
    },

    /// The request never produced a response (connect, DNS, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response whose body could not be used
    #[error("Invalid response from {endpoint}: {reason}")]
    InvalidResponse {
        /// Endpoint path relative to the API root
        endpoint: String,
        /// What was wrong with the body
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl GlitchTipError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GlitchTipError::Api { status, .. } => Some(*status),
            GlitchTipError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GlitchTipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = GlitchTipError::Api {
            status: 404,
            body: "{\"detail\":\"Not found.\"}".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: {\"detail\":\"Not found.\"}");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let err = GlitchTipError::Config("missing token".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Configuration error: missing token");
    }

    #[test]
    fn test_invalid_response_display() {
        let err = GlitchTipError::InvalidResponse {
            endpoint: "/organizations/".to_string(),
            reason: "expected a list".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid response from /organizations/: expected a list"
        );
    }
}
