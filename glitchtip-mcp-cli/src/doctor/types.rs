//! Type definitions for the doctor module

/// Status of a diagnostic check
#[derive(Debug, PartialEq, Clone)]
pub enum CheckStatus {
    /// Check passed without issues
    Ok,
    /// Check passed but with potential issues
    Warning,
    /// Check failed with errors
    Error,
}

/// Exit codes for the doctor command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All checks passed
    Success = 0,
    /// Warnings detected
    Warning = 1,
    /// Errors detected
    Error = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Result of a single diagnostic check
#[derive(Debug, Clone)]
pub struct Check {
    /// Name of the check performed
    pub name: String,
    /// Status of the check (Ok, Warning, Error)
    pub status: CheckStatus,
    /// Descriptive message about the check result
    pub message: String,
    /// Optional fix suggestion for warnings or errors
    pub fix: Option<String>,
}

impl Check {
    /// Create a new Check with builder pattern
    ///
    /// # Example
    ///
    /// ```
    /// use glitchtip_mcp_cli::doctor::{Check, CheckStatus};
    ///
    /// let check = Check::new("API token", CheckStatus::Ok)
    ///     .with_message("Token provided")
    ///     .build();
    /// assert!(check.fix.is_none());
    /// ```
    pub fn new(name: impl Into<String>, status: CheckStatus) -> CheckBuilder {
        CheckBuilder {
            name: name.into(),
            status,
            message: String::new(),
            fix: None,
        }
    }
}

/// Builder for creating Check instances
pub struct CheckBuilder {
    name: String,
    status: CheckStatus,
    message: String,
    fix: Option<String>,
}

impl CheckBuilder {
    /// Set the message for this check
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the fix suggestion for this check
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Build the Check instance
    pub fn build(self) -> Check {
        Check {
            name: self.name,
            status: self.status,
            message: self.message,
            fix: self.fix,
        }
    }
}

/// Where the host URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSource {
    /// `--host` flag
    Flag,
    /// `GLITCHTIP_HOST`
    Environment,
    /// Built-in default
    Default,
}

impl std::fmt::Display for HostSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostSource::Flag => write!(f, "--host flag"),
            HostSource::Environment => write!(f, "GLITCHTIP_HOST"),
            HostSource::Default => write!(f, "default"),
        }
    }
}

/// Groups of checks organized by category
pub(crate) struct CheckGroups<'a> {
    pub config_checks: Vec<&'a Check>,
    pub connectivity_checks: Vec<&'a Check>,
}

/// Count of checks by status
pub(crate) struct CheckCounts {
    pub ok_count: usize,
    pub warning_count: usize,
    pub error_count: usize,
}
