//! Organization tools

pub mod list;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all organization-related tools with the registry
pub fn register_organization_tools(registry: &mut ToolRegistry) {
    registry.register(list::ListOrganizationsTool::new());
}
