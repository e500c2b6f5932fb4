//! Shared utilities for MCP operations
//!
//! Validation failures become protocol-level `invalid_params` errors. API
//! failures become tool-level error responses, so the client sees them as
//! text and the server keeps running.

use super::tool_registry::BaseToolImpl;
use crate::error::GlitchTipError;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::{Deserialize, Deserializer};

/// Common error handling patterns for MCP operations
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Turn an API failure into an `Error: ...` tool response
    pub fn handle_error(error: GlitchTipError, operation: &str) -> CallToolResult {
        tracing::error!("MCP operation '{}' failed: {}", operation, error);
        BaseToolImpl::create_error_response(error.to_string())
    }

    /// Render a successful result, or the error response for a failed one
    pub fn handle_result(
        result: crate::Result<String>,
        operation: &str,
    ) -> CallToolResult {
        match result {
            Ok(text) => BaseToolImpl::create_success_response(text),
            Err(e) => Self::handle_error(e, operation),
        }
    }
}

/// Validation utilities for MCP requests
pub struct McpValidation;

impl McpValidation {
    /// Validate string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> Result<(), McpError> {
        if value.trim().is_empty() {
            return Err(McpError::invalid_params(
                format!("{field} cannot be empty"),
                None,
            ));
        }
        Ok(())
    }

    /// Validate a value that is spliced into a request path.
    ///
    /// Slugs and ids must not be able to change which endpoint is called, so
    /// `/`, `?`, `#` and whitespace are rejected.
    pub fn validate_path_segment(value: &str, field: &str) -> Result<(), McpError> {
        Self::validate_not_empty(value, field)?;

        if let Some(c) = value
            .chars()
            .find(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace())
        {
            return Err(McpError::invalid_params(
                format!("{field} contains invalid character: '{c}'"),
                None,
            ));
        }
        Ok(())
    }

    /// Validate a page size
    pub fn validate_limit(limit: u32, field: &str) -> Result<(), McpError> {
        if limit == 0 {
            return Err(McpError::invalid_params(
                format!("{field} must be at least 1"),
                None,
            ));
        }
        Ok(())
    }
}

/// Deserialize a page size given either as an integer or as an integral float.
///
/// Some clients send every JSON number as a float, so `5.0` reads as `5`.
pub fn deserialize_limit<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "limit must be a whole number, got {value}"
        )));
    }
    Ok(value as u32)
}
