//! Integration layer for calling MCP tools from CLI commands
//!
//! The `tool` and `tools` commands go through the same [`McpServer`] the stdio
//! server uses, so a tool behaves identically from a shell and from an MCP
//! client.

use glitchtip_mcp::mcp::tools::register_all_tools;
use glitchtip_mcp::mcp::{BaseToolImpl, ToolRegistry};
use glitchtip_mcp::{ApiClient, GlitchTipConfig, McpServer};
use rmcp::model::{CallToolResult, Tool};
use rmcp::Error as McpError;
use serde_json::{Map, Value};

use crate::error::{CliError, CliResult};
use crate::exit_codes::{EXIT_ERROR, EXIT_WARNING};

/// CLI-specific tool context that can execute MCP tools
pub struct CliToolContext {
    server: McpServer,
}

impl CliToolContext {
    /// Create a context talking to the configured GlitchTip server
    pub fn new(config: GlitchTipConfig) -> Self {
        Self {
            server: McpServer::new(config),
        }
    }

    /// Create a context on top of an existing API client
    pub fn with_api_client(api: ApiClient) -> Self {
        Self {
            server: McpServer::with_api_client(api),
        }
    }

    /// Execute an MCP tool with the given arguments
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        arguments: Map<String, Value>,
    ) -> Result<CallToolResult, McpError> {
        self.server.execute_tool(tool_name, arguments).await
    }

    /// Names and one-line summaries of all tools, sorted by name
    pub fn list_tools(&self) -> Vec<(String, String)> {
        summarize(self.server.tools())
    }

    /// Check if a tool exists
    pub fn has_tool(&self, tool_name: &str) -> bool {
        self.server.tool_names().iter().any(|name| name == tool_name)
    }

    /// Parse `--args` into a JSON object; no value means no arguments
    pub fn parse_arguments(raw: Option<&str>) -> CliResult<Map<String, Value>> {
        let Some(raw) = raw else {
            return Ok(Map::new());
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(CliError::new(
                format!("--args must be a JSON object, got: {other}"),
                EXIT_ERROR,
            )),
            Err(e) => Err(CliError::new(
                format!("--args is not valid JSON: {e}"),
                EXIT_ERROR,
            )),
        }
    }

    /// Run one tool and return its text.
    ///
    /// Unknown tools and rejected arguments fail with exit code 2, an error
    /// reported by the tool itself fails with exit code 1.
    pub async fn run_tool(&self, tool_name: &str, raw_arguments: Option<&str>) -> CliResult<String> {
        if !self.has_tool(tool_name) {
            return Err(CliError::new(
                format!(
                    "Unknown tool: {tool_name}. Run 'glitchtip-mcp tools' to list the available tools."
                ),
                EXIT_ERROR,
            ));
        }

        let arguments = Self::parse_arguments(raw_arguments)?;
        let result = self
            .execute_tool(tool_name, arguments)
            .await
            .map_err(|e| CliError::new(e.message.to_string(), EXIT_ERROR))?;

        let text = BaseToolImpl::response_text(&result)
            .unwrap_or_default()
            .to_string();

        if result.is_error.unwrap_or(false) {
            let message = text.strip_prefix("Error: ").unwrap_or(&text).to_string();
            return Err(CliError::new(message, EXIT_WARNING));
        }

        Ok(text)
    }
}

/// Tool names and summaries without a GlitchTip connection
pub fn tool_catalog() -> Vec<(String, String)> {
    let mut registry = ToolRegistry::new();
    register_all_tools(&mut registry);
    summarize(registry.list_tools())
}

fn summarize(tools: Vec<Tool>) -> Vec<(String, String)> {
    tools
        .into_iter()
        .map(|tool| {
            let summary = tool
                .description
                .as_deref()
                .and_then(|d| d.lines().find(|line| !line.trim().is_empty()))
                .unwrap_or_default()
                .trim()
                .to_string();
            (tool.name.to_string(), summary)
        })
        .collect()
}

/// Utilities for formatting MCP responses for CLI display
pub mod response_formatting {
    use colored::*;

    /// One `name  summary` line per tool, names padded to a common width
    pub fn format_tool_list(tools: &[(String, String)], use_colors: bool) -> String {
        let width = tools.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        tools
            .iter()
            .map(|(name, summary)| {
                let padded = format!("{name:<width$}");
                if use_colors {
                    format!("{}  {}", padded.bold(), summary)
                } else {
                    format!("{padded}  {summary}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
