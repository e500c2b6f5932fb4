use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "glitchtip-mcp")]
#[command(version)]
#[command(about = "An MCP server for the GlitchTip error-tracking API")]
#[command(long_about = "
glitchtip-mcp is an MCP (Model Context Protocol) server that lets an assistant
browse GlitchTip organizations, projects, issues and events, and resolve issues.

The server reads GLITCHTIP_HOST (default http://localhost:18000) and
GLITCHTIP_TOKEN (required) from the environment.

Example usage:
  glitchtip-mcp serve                                   # Run as MCP server
  glitchtip-mcp tools                                   # List the available tools
  glitchtip-mcp tool list_projects --args '{\"organization_slug\":\"acme\"}'
  glitchtip-mcp doctor                                  # Check configuration and connectivity
  glitchtip-mcp completion bash > ~/.bashrc.d/glitchtip-mcp
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// GlitchTip server URL (overrides GLITCHTIP_HOST)
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,

    /// GlitchTip API token (overrides GLITCHTIP_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio (default when no command is given)
    #[command(long_about = "
Runs glitchtip-mcp as an MCP server on stdin/stdout. This is the default mode
when no command is given. The server exits when stdin closes or on Ctrl-C.

Logs are written to stderr, or to the file named by GLITCHTIP_MCP_LOG_FILE.

Example:
  glitchtip-mcp serve
  # Or configure it as a stdio server in your MCP client settings
")]
    Serve,
    /// Run a single tool and print its output
    #[command(long_about = "
Runs one tool directly, the same way an MCP client would, and prints its
Markdown output.

Exit codes:
  0 - Tool succeeded
  1 - Tool reported an error (for example an API error)
  2 - Unknown tool, malformed --args or invalid arguments

Examples:
  glitchtip-mcp tool list_organizations
  glitchtip-mcp tool get_issue --args '{\"issue_id\":\"42\"}'
")]
    Tool {
        /// Name of the tool to run
        name: String,

        /// Tool arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,
    },
    /// List the available tools
    Tools,
    /// Diagnose configuration and connectivity issues
    #[command(long_about = "
Checks the configuration and whether the GlitchTip API can be reached with it.

Exit codes:
  0 - All checks passed
  1 - Warnings found
  2 - Errors found

Example:
  glitchtip-mcp doctor
  glitchtip-mcp doctor --host https://glitchtip.example.com
")]
    Doctor,
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells.

Examples:
  # Bash (add to ~/.bashrc or ~/.bash_profile)
  glitchtip-mcp completion bash > ~/.local/share/bash-completion/completions/glitchtip-mcp

  # Zsh (add to ~/.zshrc or a file in fpath)
  glitchtip-mcp completion zsh > ~/.zfunc/_glitchtip-mcp

  # Fish
  glitchtip-mcp completion fish > ~/.config/fish/completions/glitchtip-mcp.fish
")]
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}
