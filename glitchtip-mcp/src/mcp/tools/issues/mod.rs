//! Issue tools
//!
//! Each tool is in its own submodule with dedicated implementation and description.

pub mod events;
pub mod get;
pub mod list;
pub mod resolve;

use crate::mcp::shared_utils::McpValidation;
use crate::mcp::tool_registry::{ToolRegistry, ToolRequest};
use rmcp::Error as McpError;
use serde::Deserialize;

/// Arguments of the tools that act on a single issue
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IssueIdRequest {
    /// Issue ID
    pub issue_id: String,
}

impl ToolRequest for IssueIdRequest {
    fn validate(&self) -> std::result::Result<(), McpError> {
        McpValidation::validate_path_segment(&self.issue_id, "issue_id")
    }
}

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListIssuesTool::new());
    registry.register(get::GetIssueTool::new());
    registry.register(events::ListIssueEventsTool::new());
    registry.register(resolve::ResolveIssueTool::new());
}
