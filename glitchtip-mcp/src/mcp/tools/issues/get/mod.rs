//! Issue detail tool

use super::IssueIdRequest;
use crate::api::types::{display_text, display_value, Event, Issue};
use crate::api::ApiClient;
use crate::mcp::shared_utils::McpErrorHandler;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;

/// Number of events shown under `Recent Events`
const RECENT_EVENTS: u32 = 3;

/// Tool for showing one issue and its latest events
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }
}

async fn fetch_issue(api: &ApiClient, issue_id: &str) -> crate::Result<String> {
    let issue: Issue = api.get_json(&format!("/issues/{issue_id}/")).await?;
    let events: Vec<Event> = api
        .get_json(&format!("/issues/{issue_id}/events/?limit={RECENT_EVENTS}"))
        .await?;
    render_issue(&issue, &events)
}

fn render_issue(issue: &Issue, events: &[Event]) -> crate::Result<String> {
    let mut output = format!("# Issue: {}\n\n", display_text(issue.title.as_deref()));
    output.push_str(&format!("- **ID:** {}\n", display_value(issue.id.as_ref())));
    output.push_str(&format!(
        "- **Type:** {}\n",
        display_text(issue.issue_type.as_deref())
    ));
    output.push_str(&format!(
        "- **Count:** {}\n",
        display_value(issue.count.as_ref())
    ));
    output.push_str(&format!(
        "- **First seen:** {}\n",
        display_text(issue.first_seen.as_deref())
    ));
    output.push_str(&format!(
        "- **Last seen:** {}\n",
        display_text(issue.last_seen.as_deref())
    ));
    output.push_str(&format!(
        "- **Status:** {}\n\n",
        display_text(issue.status.as_deref())
    ));

    if !events.is_empty() {
        output.push_str("## Recent Events\n\n");
        for event in events {
            output.push_str(&format!(
                "### Event {}\n",
                display_value(event.event_id.as_ref())
            ));
            output.push_str(&format!(
                "- Time: {}\n",
                display_text(event.date_created.as_deref())
            ));
            if let Some(message) = event.message() {
                output.push_str(&format!("- Message: {message}\n"));
            }
            if let Some(context) = event.context() {
                let pretty = serde_json::to_string_pretty(context)?;
                output.push_str(&format!("- Context: ```json\n{pretty}\n```\n"));
            }
            output.push('\n');
        }
    }

    Ok(output)
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "get_issue"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<IssueIdRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: IssueIdRequest = BaseToolImpl::parse_request(arguments)?;
        tracing::debug!("Fetching issue {}", request.issue_id);

        let result = fetch_issue(&context.api, &request.issue_id).await;
        Ok(McpErrorHandler::handle_result(result, "get issue"))
    }
}
