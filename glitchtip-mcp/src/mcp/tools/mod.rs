//! GlitchTip tools
//!
//! Each tool lives in its own submodule with its implementation, request type
//! and a `description.md` that is served as the tool description.

pub mod events;
pub mod issues;
pub mod organizations;
pub mod projects;

use super::tool_registry::ToolRegistry;

/// Register every GlitchTip tool with the registry
pub fn register_all_tools(registry: &mut ToolRegistry) {
    organizations::register_organization_tools(registry);
    projects::register_project_tools(registry);
    issues::register_issue_tools(registry);
    events::register_event_tools(registry);
}
