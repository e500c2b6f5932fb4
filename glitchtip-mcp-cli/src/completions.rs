use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::{self, Write};

/// Name completions are generated for
pub const BIN_NAME: &str = "glitchtip-mcp";

/// Write the completion script for `shell` to `out`
pub fn write_completion<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, out);
    out.flush()?;
    Ok(())
}

/// Print shell completion script to stdout
pub fn print_completion(shell: Shell) -> Result<()> {
    write_completion(shell, &mut io::stdout())
}
