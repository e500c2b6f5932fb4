//! Event tools

pub mod latest;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all event-related tools with the registry
pub fn register_event_tools(registry: &mut ToolRegistry) {
    registry.register(latest::GetLatestEventsTool::new());
}
