//! Error handling for the glitchtip-mcp CLI
//!
//! Errors carry the exit code they should end the process with, so commands
//! can fail with `?` and `main` only has to call [`handle_cli_result`].

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use glitchtip_mcp::GlitchTipError;
use std::error::Error;
use std::fmt;

/// CLI-specific result type that preserves error information
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type that includes both error information and suggested exit code
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    /// Create a new CLI error with a message and exit code
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a CLI error from another error with a specific exit code
    pub fn from_error<E: Error + Send + Sync + 'static>(error: E, exit_code: i32) -> Self {
        let message = error.to_string();
        Self {
            message,
            exit_code,
            source: Some(Box::new(error)),
        }
    }

    /// Configuration problems end the process with exit code 2.
    ///
    /// The message is the bare reason, e.g.
    /// `GLITCHTIP_TOKEN environment variable is required`.
    pub fn config(error: GlitchTipError) -> Self {
        match error {
            GlitchTipError::Config(message) => Self::new(message, EXIT_ERROR),
            other => Self::from_error(other, EXIT_ERROR),
        }
    }

    /// Get the full error chain as a formatted string
    pub fn full_chain(&self) -> String {
        let mut result = self.message.clone();

        let mut current_source = self.source();
        while let Some(err) = current_source {
            let cause = err.to_string();
            if !result.contains(&cause) {
                result.push_str(&format!("\n  Caused by: {cause}"));
            }
            current_source = err.source();
        }

        result
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

/// Convert a CliResult to an exit code, printing the full error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}
