//! Example: list organizations and their projects
//!
//! Reads `GLITCHTIP_HOST` and `GLITCHTIP_TOKEN` from the environment, then
//! runs two tools the same way an MCP client would.

use glitchtip_mcp::mcp::BaseToolImpl;
use glitchtip_mcp::{GlitchTipConfig, McpServer};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GlitchTipConfig::from_env()?;
    println!("Connecting to {}", config.base_url());

    let server = McpServer::new(config);
    println!("Available tools: {}", server.tool_names().join(", "));

    let result = server
        .execute_tool("list_organizations", serde_json::Map::new())
        .await
        .map_err(|e| e.message.to_string())?;
    println!("{}", BaseToolImpl::response_text(&result).unwrap_or_default());

    if let Some(slug) = std::env::args().nth(1) {
        let arguments = json!({ "organization_slug": slug });
        let result = server
            .execute_tool(
                "list_projects",
                arguments.as_object().cloned().unwrap_or_default(),
            )
            .await
            .map_err(|e| e.message.to_string())?;
        println!("\n{}", BaseToolImpl::response_text(&result).unwrap_or_default());
    }

    Ok(())
}
