//! MCP server exposing the GlitchTip tools

use crate::api::ApiClient;
use crate::config::GlitchTipConfig;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::register_all_tools;

const SERVER_NAME: &str = "GlitchTip";

const INSTRUCTIONS: &str = "Read-mostly access to a GlitchTip error tracking instance. \
Use list_organizations to discover organization slugs, list_projects and list_issues to browse, \
get_issue, list_issue_events and get_latest_events for details, and resolve_issue to mark an issue resolved.";

/// MCP server for the GlitchTip tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("tools", &self.tool_registry.list_tool_names())
            .field("api", &self.tool_context.api)
            .finish()
    }
}

impl McpServer {
    /// Create a server that talks to the GlitchTip instance in `config`
    pub fn new(config: GlitchTipConfig) -> Self {
        Self::with_api_client(ApiClient::new(Arc::new(config)))
    }

    /// Create a server on top of an existing API client
    pub fn with_api_client(api: ApiClient) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_all_tools(&mut tool_registry);
        tracing::debug!("Registered {} tools", tool_registry.len());

        Self {
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(Arc::new(api))),
        }
    }

    /// Names of all tools, sorted
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }

    /// Tool definitions as advertised in `tools/list`
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Run one tool by name.
    ///
    /// # Errors
    ///
    /// `invalid_request` for an unknown tool, `invalid_params` for arguments
    /// that fail to parse or validate. API failures are not errors here; they
    /// come back as a result with `is_error` set.
    pub async fn execute_tool(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => {
                tracing::debug!("Calling tool {}", name);
                tool.execute(arguments, &self.tool_context).await
            }
            None => {
                tracing::warn!("Unknown tool requested: {}", name);
                Err(McpError::invalid_request(
                    format!("Unknown tool: {name}"),
                    None,
                ))
            }
        }
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.execute_tool(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock_transport::MockTransport;
    use crate::mcp::tool_registry::BaseToolImpl;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    fn server() -> (McpServer, Arc<MockTransport>) {
        let (client, transport) = MockTransport::client();
        (McpServer::with_api_client(client), transport)
    }

    #[test]
    fn test_server_registers_all_tools() {
        let (server, _) = server();
        assert_eq!(
            server.tool_names(),
            vec![
                "get_issue",
                "get_latest_events",
                "list_issue_events",
                "list_issues",
                "list_organizations",
                "list_projects",
                "resolve_issue",
            ]
        );
    }

    #[test]
    fn test_every_tool_has_description_and_object_schema() {
        let (server, _) = server();
        for tool in server.tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.trim().is_empty(), "{}", tool.name);
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&json!("object")),
                "{}",
                tool.name
            );
        }
    }

    #[test]
    fn test_server_info() {
        let (server, _) = server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert_eq!(info.server_info.version, crate::VERSION);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_request() {
        let (server, transport) = server();
        let err = server
            .execute_tool("delete_everything", serde_json::Map::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
        assert!(err.message.contains("Unknown tool: delete_everything"));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_execute_tool_dispatches_by_name() {
        let (server, transport) = server();
        transport.respond_json(
            "/organizations/",
            json!([{"name": "Acme", "slug": "acme"}]),
        );

        let result = server
            .execute_tool("list_organizations", serde_json::Map::new())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert!(BaseToolImpl::response_text(&result)
            .unwrap()
            .contains("- Acme (acme)"));
    }
}
