//! Model Context Protocol (MCP) server support
//!
//! This module exposes the GlitchTip tools through the Model Context Protocol.

pub mod server;
pub mod shared_utils;
pub mod tool_registry;
pub mod tools;

pub use server::McpServer;
pub use shared_utils::{McpErrorHandler, McpValidation};
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry, ToolRequest};
