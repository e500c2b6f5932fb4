//! Issue event listing tool

use crate::api::types::{display_text, display_value, Event};
use crate::mcp::shared_utils::{deserialize_limit, McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Deserialize;

fn default_limit() -> u32 {
    10
}

/// Arguments of `list_issue_events`
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListIssueEventsRequest {
    /// Issue ID
    pub issue_id: String,
    /// Max events to return
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[schemars(range(min = 1))]
    pub limit: u32,
}

impl ToolRequest for ListIssueEventsRequest {
    fn validate(&self) -> std::result::Result<(), McpError> {
        McpValidation::validate_path_segment(&self.issue_id, "issue_id")?;
        McpValidation::validate_limit(self.limit, "limit")
    }
}

/// Tool for listing the events of an issue
#[derive(Default)]
pub struct ListIssueEventsTool;

impl ListIssueEventsTool {
    /// Creates a new instance of the ListIssueEventsTool
    pub fn new() -> Self {
        Self
    }
}

fn render_event(ordinal: usize, event: &Event) -> String {
    let mut block = format!(
        "### Event {ordinal}\n- ID: {}\n- Time: {}\n",
        display_value(event.event_id.as_ref()),
        display_text(event.date_created.as_deref())
    );
    if let Some(message) = event.message() {
        block.push_str(&format!("- Message: {message}\n"));
    }
    if let Some(tags) = event.rendered_tags() {
        block.push_str(&format!("- Tags: {tags}\n"));
    }
    block
}

fn render_events(issue_id: &str, events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }

    let blocks = events
        .iter()
        .enumerate()
        .map(|(i, event)| render_event(i + 1, event))
        .collect::<Vec<_>>()
        .join("\n");

    format!("# Events for Issue {issue_id}\n\n{blocks}")
}

#[async_trait]
impl McpTool for ListIssueEventsTool {
    fn name(&self) -> &'static str {
        "list_issue_events"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<ListIssueEventsRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListIssueEventsRequest = BaseToolImpl::parse_request(arguments)?;
        let endpoint = format!(
            "/issues/{}/events/?limit={}",
            request.issue_id, request.limit
        );

        let result = context
            .api
            .get_json::<Vec<Event>>(&endpoint)
            .await
            .map(|events| render_events(&request.issue_id, &events));

        Ok(McpErrorHandler::handle_result(result, "list issue events"))
    }
}
