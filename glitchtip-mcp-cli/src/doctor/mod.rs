//! Doctor module for diagnosing a GlitchTip MCP setup
//!
//! Checks that a token is configured, that the host looks like a URL, and
//! that the server accepts the token.
//!
//! # Usage
//!
//! ```no_run
//! use glitchtip_mcp_cli::doctor::Doctor;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let mut doctor = Doctor::new(None, None);
//! let exit_code = doctor.run_diagnostics().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The doctor returns exit codes:
//! - 0: All checks passed
//! - 1: Some warnings detected
//! - 2: Errors detected

use anyhow::Result;
use colored::*;
use glitchtip_mcp::{ApiClient, GlitchTipConfig};
use std::sync::Arc;

pub use types::*;

pub mod checks;
pub mod types;

/// Accumulates diagnostic results and prints a summary
pub struct Doctor {
    host: Option<String>,
    token: Option<String>,
    checks: Vec<Check>,
}

impl Doctor {
    /// Create a doctor for the given `--host` / `--token` overrides
    pub fn new(host: Option<String>, token: Option<String>) -> Self {
        Self {
            host,
            token,
            checks: Vec::new(),
        }
    }

    /// Run all diagnostic checks, print them, and return the exit code
    pub async fn run_diagnostics(&mut self) -> Result<i32> {
        println!("{}", "GlitchTip MCP Doctor".bold().blue());
        println!("{}", "Running diagnostics...".dimmed());
        println!();

        let config = GlitchTipConfig::from_env_with_overrides(self.host.clone(), self.token.clone());
        self.run_configuration_checks(&config);
        match config {
            Ok(config) => {
                let api = ApiClient::new(Arc::new(config));
                self.run_connectivity_checks(&api).await;
            }
            Err(_) => checks::skip_connectivity(&mut self.checks),
        }

        self.print_results();

        Ok(self.get_exit_code())
    }

    fn run_configuration_checks(&mut self, config: &glitchtip_mcp::Result<GlitchTipConfig>) {
        checks::check_token(&mut self.checks, config);
        let (host, source) = checks::resolve_host(self.host.as_deref());
        checks::check_host(&mut self.checks, &host, source);
    }

    async fn run_connectivity_checks(&mut self, api: &ApiClient) {
        checks::check_connectivity(&mut self.checks, api).await;
    }

    /// Checks collected so far
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Print all check results
    pub fn print_results(&self) {
        let use_color = crate::cli::Cli::should_use_color();
        let groups = self.group_checks_by_category();

        print_check_category(&groups.config_checks, "Configuration:", use_color);
        print_check_category(&groups.connectivity_checks, "Connectivity:", use_color);

        self.print_summary(use_color);
    }

    fn group_checks_by_category(&self) -> CheckGroups<'_> {
        let (connectivity_checks, config_checks): (Vec<&Check>, Vec<&Check>) = self
            .checks
            .iter()
            .partition(|c| c.name == checks::check_names::API_CONNECTIVITY);
        CheckGroups {
            config_checks,
            connectivity_checks,
        }
    }

    fn print_summary(&self, use_color: bool) {
        let counts = self.count_check_statuses();

        if use_color {
            println!("{}", "Summary:".bold().green());
        } else {
            println!("Summary:");
        }

        match (counts.error_count, counts.warning_count) {
            (0, 0) => println!("  All checks passed!"),
            (0, warnings) => {
                if use_color {
                    println!(
                        "  {} checks passed, {} warnings",
                        counts.ok_count.to_string().green(),
                        warnings.to_string().yellow()
                    );
                } else {
                    println!("  {} checks passed, {} warnings", counts.ok_count, warnings);
                }
            }
            (errors, warnings) => {
                if use_color {
                    println!(
                        "  {} checks passed, {} warnings, {} errors",
                        counts.ok_count.to_string().green(),
                        warnings.to_string().yellow(),
                        errors.to_string().red()
                    );
                } else {
                    println!(
                        "  {} checks passed, {} warnings, {} errors",
                        counts.ok_count, warnings, errors
                    );
                }
            }
        }
    }

    fn count_check_statuses(&self) -> CheckCounts {
        let count = |status: CheckStatus| self.checks.iter().filter(|c| c.status == status).count();
        CheckCounts {
            ok_count: count(CheckStatus::Ok),
            warning_count: count(CheckStatus::Warning),
            error_count: count(CheckStatus::Error),
        }
    }

    /// Exit code for the worst status seen
    pub fn get_exit_code(&self) -> i32 {
        let has_error = self.checks.iter().any(|c| c.status == CheckStatus::Error);
        let has_warning = self.checks.iter().any(|c| c.status == CheckStatus::Warning);

        let exit_code = if has_error {
            ExitCode::Error
        } else if has_warning {
            ExitCode::Warning
        } else {
            ExitCode::Success
        };

        exit_code.into()
    }
}

fn print_check_category(checks: &[&Check], category_name: &str, use_color: bool) {
    if checks.is_empty() {
        return;
    }
    if use_color {
        println!("{}", category_name.bold().yellow());
    } else {
        println!("{category_name}");
    }
    for check in checks {
        print_check(check, use_color);
    }
    println!();
}

fn print_check(check: &Check, use_color: bool) {
    let (symbol, color_fn): (&str, fn(&str) -> ColoredString) = match check.status {
        CheckStatus::Ok => ("✓", |s: &str| s.green()),
        CheckStatus::Warning => ("⚠", |s: &str| s.yellow()),
        CheckStatus::Error => ("✗", |s: &str| s.red()),
    };

    if use_color {
        println!(
            "  {} {} - {}",
            color_fn(symbol),
            check.name.bold(),
            check.message
        );
    } else {
        println!("  {} {} - {}", symbol, check.name, check.message);
    }

    if let Some(fix) = &check.fix {
        if use_color {
            println!("    {} {}", "→".dimmed(), fix.dimmed());
        } else {
            println!("    → {fix}");
        }
    }
}
