//! Latest events tool
//!
//! GlitchTip does not reliably serve `/organizations/{org}/events/`. When that
//! call fails for any reason the tool falls back to the events of the
//! organization's first project. An empty but successful org-level answer is
//! rendered as is and does not trigger the fallback.

use crate::api::types::{display_text, display_value, Event, Project};
use crate::api::ApiClient;
use crate::error::GlitchTipError;
use crate::mcp::shared_utils::{deserialize_limit, McpErrorHandler, McpValidation};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRequest};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde::Deserialize;

fn default_limit() -> u32 {
    5
}

/// Arguments of `get_latest_events`
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetLatestEventsRequest {
    /// Organization slug
    pub organization_slug: String,
    /// Max events to return
    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[schemars(range(min = 1))]
    pub limit: u32,
}

impl ToolRequest for GetLatestEventsRequest {
    fn validate(&self) -> std::result::Result<(), McpError> {
        McpValidation::validate_path_segment(&self.organization_slug, "organization_slug")?;
        McpValidation::validate_limit(self.limit, "limit")
    }
}

/// Where the events came from
#[derive(Debug)]
enum LatestEvents {
    Events(Vec<Event>),
    NoProjects,
}

/// Tool for showing the newest events of an organization
#[derive(Default)]
pub struct GetLatestEventsTool;

impl GetLatestEventsTool {
    /// Creates a new instance of the GetLatestEventsTool
    pub fn new() -> Self {
        Self
    }
}

async fn fetch_latest_events(
    api: &ApiClient,
    organization_slug: &str,
    limit: u32,
) -> crate::Result<LatestEvents> {
    let endpoint = format!("/organizations/{organization_slug}/events/?limit={limit}");
    match api.get(&endpoint).await {
        Ok(value) => return Ok(LatestEvents::Events(crate::api::decode(&endpoint, value)?)),
        Err(e) => tracing::debug!(
            "Organization events unavailable for {}, falling back to first project: {}",
            organization_slug,
            e
        ),
    }

    let projects_endpoint = format!("/organizations/{organization_slug}/projects/");
    let projects: Vec<Project> = api.get_json(&projects_endpoint).await?;
    let Some(first) = projects.first() else {
        return Ok(LatestEvents::NoProjects);
    };

    let project_slug = first
        .slug
        .as_deref()
        .filter(|slug| !slug.trim().is_empty())
        .ok_or_else(|| GlitchTipError::InvalidResponse {
            endpoint: projects_endpoint.clone(),
            reason: "first project has no slug".to_string(),
        })?;
    let events = api
        .get_json(&format!(
            "/projects/{organization_slug}/{project_slug}/events/?limit={limit}"
        ))
        .await?;
    Ok(LatestEvents::Events(events))
}

fn render_latest_events(latest: &LatestEvents) -> String {
    let events = match latest {
        LatestEvents::NoProjects => return "No projects found.".to_string(),
        LatestEvents::Events(events) if events.is_empty() => {
            return "No recent events.".to_string()
        }
        LatestEvents::Events(events) => events,
    };

    let entries = events
        .iter()
        .map(|event| {
            format!(
                "- **{}**\n  Time: {}\n  ID: {}",
                event.headline(),
                display_text(event.date_created.as_deref()),
                display_value(event.event_id.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("# Latest Events\n\n{entries}")
}

#[async_trait]
impl McpTool for GetLatestEventsTool {
    fn name(&self) -> &'static str {
        "get_latest_events"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        BaseToolImpl::schema_for::<GetLatestEventsRequest>()
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: GetLatestEventsRequest = BaseToolImpl::parse_request(arguments)?;

        let result = fetch_latest_events(&context.api, &request.organization_slug, request.limit)
            .await
            .map(|latest| render_latest_events(&latest));

        Ok(McpErrorHandler::handle_result(result, "get latest events"))
    }
}
