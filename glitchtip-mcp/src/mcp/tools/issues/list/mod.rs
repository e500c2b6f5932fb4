//! Issue listing tool

use crate::api::types::{display_text, display_value, Issue};
use crate::mcp::shared_utils::{deserialize_limit, McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Deserialize;

fn default_limit() -> u32 {
    10
}

/// Arguments of `list_issues`
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListIssuesRequest {
    /// Organization slug
    pub organization_slug: String,
    /// Project slug
    pub project_slug: String,
    /// Max issues to return
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[schemars(range(min = 1))]
    pub limit: u32,
}

impl ToolRequest for ListIssuesRequest {
    fn validate(&self) -> std::result::Result<(), McpError> {
        McpValidation::validate_path_segment(&self.organization_slug, "organization_slug")?;
        McpValidation::validate_path_segment(&self.project_slug, "project_slug")?;
        McpValidation::validate_limit(self.limit, "limit")
    }
}

/// Tool for listing the issues of a project
#[derive(Default)]
pub struct ListIssuesTool;

impl ListIssuesTool {
    /// Creates a new instance of the ListIssuesTool
    pub fn new() -> Self {
        Self
    }
}

fn render_issues(project_slug: &str, issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "No issues found.".to_string();
    }

    let blocks = issues
        .iter()
        .map(|issue| {
            format!(
                "### {}\n- ID: {}\n- Count: {}\n- First seen: {}\n- Last seen: {}\n",
                display_text(issue.title.as_deref()),
                display_value(issue.id.as_ref()),
                display_value(issue.count.as_ref()),
                display_text(issue.first_seen.as_deref()),
                display_text(issue.last_seen.as_deref())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("# Issues in {project_slug}\n\n{blocks}")
}

#[async_trait]
impl McpTool for ListIssuesTool {
    fn name(&self) -> &'static str {
        "list_issues"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<ListIssuesRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListIssuesRequest = BaseToolImpl::parse_request(arguments)?;
        let endpoint = format!(
            "/projects/{}/{}/issues/?limit={}",
            request.organization_slug, request.project_slug, request.limit
        );

        let result = context
            .api
            .get_json::<Vec<Issue>>(&endpoint)
            .await
            .map(|issues| render_issues(&request.project_slug, &issues));

        Ok(McpErrorHandler::handle_result(result, "list issues"))
    }
}
