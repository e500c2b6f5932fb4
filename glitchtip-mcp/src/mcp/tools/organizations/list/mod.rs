//! Organization listing tool

use crate::api::types::{display_text, Organization};
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Deserialize;

const ENDPOINT: &str = "/organizations/";

/// Arguments of `list_organizations`; it takes none
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListOrganizationsRequest {}

impl ToolRequest for ListOrganizationsRequest {}

/// Tool for listing organizations
#[derive(Default)]
pub struct ListOrganizationsTool;

impl ListOrganizationsTool {
    /// Creates a new instance of the ListOrganizationsTool
    pub fn new() -> Self {
        Self
    }
}

fn render_organizations(orgs: &[Organization]) -> String {
    if orgs.is_empty() {
        return "No organizations found.".to_string();
    }

    let lines = orgs
        .iter()
        .map(|org| {
            format!(
                "- {} ({})",
                display_text(org.name.as_deref()),
                display_text(org.slug.as_deref())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("# Organizations\n\n{lines}\n\nTotal: {}", orgs.len())
}

#[async_trait]
impl McpTool for ListOrganizationsTool {
    fn name(&self) -> &'static str {
        "list_organizations"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<ListOrganizationsRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let _request: ListOrganizationsRequest = BaseToolImpl::parse_request(arguments)?;

        let result = context
            .api
            .get_json::<Vec<Organization>>(ENDPOINT)
            .await
            .map(|orgs| render_organizations(&orgs));

        Ok(McpErrorHandler::handle_result(result, "list organizations"))
    }
}
