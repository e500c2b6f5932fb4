//! Project listing tool

use crate::api::types::{display_text, display_value, Project};
use crate::mcp::shared_utils::{McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Deserialize;

/// Arguments of `list_projects`
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListProjectsRequest {
    /// Organization slug
    pub organization_slug: String,
}

impl ToolRequest for ListProjectsRequest {
    fn validate(&self) -> std::result::Result<(), McpError> {
        McpValidation::validate_path_segment(&self.organization_slug, "organization_slug")
    }
}

/// Tool for listing the projects of an organization
#[derive(Default)]
pub struct ListProjectsTool;

impl ListProjectsTool {
    /// Creates a new instance of the ListProjectsTool
    pub fn new() -> Self {
        Self
    }
}

fn render_projects(organization_slug: &str, projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }

    let lines = projects
        .iter()
        .map(|project| {
            format!(
                "- **{}** ({}) - ID: {}",
                display_text(project.name.as_deref()),
                display_text(project.slug.as_deref()),
                display_value(project.id.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Projects in {organization_slug}\n\n{lines}\n\nTotal: {}",
        projects.len()
    )
}

#[async_trait]
impl McpTool for ListProjectsTool {
    fn name(&self) -> &'static str {
        "list_projects"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<ListProjectsRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListProjectsRequest = BaseToolImpl::parse_request(arguments)?;
        let endpoint = format!("/organizations/{}/projects/", request.organization_slug);

        let result = context
            .api
            .get_json::<Vec<Project>>(&endpoint)
            .await
            .map(|projects| render_projects(&request.organization_slug, &projects));

        Ok(McpErrorHandler::handle_result(result, "list projects"))
    }
}
