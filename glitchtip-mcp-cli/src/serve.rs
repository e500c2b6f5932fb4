//! Stdio MCP server bootstrap

use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_WARNING;
use crate::signal_handler::wait_for_shutdown_signal;
use glitchtip_mcp::{GlitchTipConfig, McpServer};
use rmcp::serve_server;
use rmcp::transport::io::stdio;

/// Load the configuration, applying `--host` / `--token` overrides.
///
/// A missing token fails with exit code 2 and the bare reason as message.
pub fn load_config(host: Option<String>, token: Option<String>) -> CliResult<GlitchTipConfig> {
    GlitchTipConfig::from_env_with_overrides(host, token).map_err(CliError::config)
}

/// Serve MCP on stdin/stdout until the client disconnects or a shutdown signal arrives
pub async fn run_server(config: GlitchTipConfig) -> CliResult<()> {
    tracing::info!("Starting GlitchTip MCP server for {}", config.base_url());
    let server = McpServer::new(config);

    let running = serve_server(server, stdio())
        .await
        .map_err(|e| CliError::new(format!("MCP server error: {e}"), EXIT_WARNING))?;
    tracing::info!("MCP server started");

    tokio::select! {
        result = running.waiting() => {
            let reason = result
                .map_err(|e| CliError::new(format!("MCP server task failed: {e}"), EXIT_WARNING))?;
            tracing::info!("MCP server stopped: {:?}", reason);
        }
        _ = wait_for_shutdown_signal() => {
            tracing::info!("MCP server shutting down");
        }
    }

    Ok(())
}
