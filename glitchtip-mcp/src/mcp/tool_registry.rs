//! Tool registry for MCP operations
//!
//! Every GlitchTip tool implements [`McpTool`] and is registered by name in a
//! [`ToolRegistry`]. Arguments arrive as a JSON map and are turned into a
//! typed [`ToolRequest`] and validated before the tool body runs, so a bad
//! argument never reaches the network.

use crate::api::ApiClient;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use rmcp::Error as McpError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Clone, Debug)]
pub struct ToolContext {
    /// Client for the GlitchTip API
    pub api: Arc<ApiClient>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

/// Typed arguments of one tool
pub trait ToolRequest: DeserializeOwned + schemars::JsonSchema {
    /// Reject values that are well-typed but unusable. The first violation wins.
    fn validate(&self) -> std::result::Result<(), McpError> {
        Ok(())
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names, sorted
    pub fn list_tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        let mut tools: Vec<&dyn McpTool> = self.tools.values().map(|t| t.as_ref()).collect();
        tools.sort_by_key(|t| t.name());

        tools
            .into_iter()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    serde_json::Value::Object(map) => map,
                    _ => serde_json::Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// Type mismatches and missing required fields are `invalid_params`
    /// protocol errors.
    pub fn parse_arguments<T: DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Parse the arguments and run the request's own validation
    pub fn parse_request<T: ToolRequest>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        let request: T = Self::parse_arguments(arguments)?;
        request.validate()?;
        Ok(request)
    }

    /// JSON schema for a request type, as advertised in `tools/list`
    pub fn schema_for<T: schemars::JsonSchema>() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| {
            serde_json::json!({
                "type": "object",
                "properties": {}
            })
        })
    }

    /// Create a success response carrying one text block
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create an error response reading `Error: {message}`
    pub fn create_error_response<T: Into<String>>(message: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: format!("Error: {}", message.into()),
                }),
                None,
            )],
            is_error: Some(true),
        }
    }

    /// Text of the first content block, if it is text
    pub fn response_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|content| match &content.raw {
            RawContent::Text(text_content) => Some(text_content.text.as_str()),
            _ => None,
        })
    }
}
