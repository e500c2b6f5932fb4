//! # GlitchTip MCP
//!
//! Model Context Protocol tools for the GlitchTip error-tracking API.
//!
//! ## Features
//!
//! - **API client**: Bearer-authenticated JSON calls against `{host}/api/0`
//! - **Tools**: Organizations, projects, issues and events rendered as Markdown
//! - **MCP Support**: A ready-to-serve [`McpServer`] implementing `rmcp::ServerHandler`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glitchtip_mcp::{GlitchTipConfig, McpServer};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GlitchTipConfig::from_env()?;
//! let server = McpServer::new(config);
//!
//! if let Ok(result) = server
//!     .execute_tool("list_organizations", serde_json::Map::new())
//!     .await
//! {
//!     println!("{:?}", result.content);
//! }
//! # Ok(())
//! # }
//! ```

/// GlitchTip REST API client and resource types
pub mod api;

/// Environment helpers
pub mod common;

/// Connection configuration
pub mod config;

/// Error types and handling
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

pub use api::ApiClient;
pub use config::GlitchTipConfig;
pub use error::{GlitchTipError, Result};
pub use mcp::McpServer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::api::{ApiClient, RequestOptions};
    pub use crate::config::GlitchTipConfig;
    pub use crate::error::{GlitchTipError, Result};
    pub use crate::mcp::{McpServer, McpTool, ToolContext, ToolRegistry};
}
