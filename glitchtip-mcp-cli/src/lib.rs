//! GlitchTip MCP CLI Library
//!
//! Command-line definitions, the stdio server bootstrap, diagnostics and exit
//! codes for the `glitchtip-mcp` binary.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Shell completion generation
pub mod completions;
/// Configuration and connectivity diagnostics
pub mod doctor;
/// CLI error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Tracing subscriber setup
pub mod logging;
/// Running MCP tools from the command line
pub mod mcp_integration;
/// MCP server over stdio
pub mod serve;
pub mod signal_handler;
