//! Individual diagnostic checks

use super::types::*;
use glitchtip_mcp::api::types::Organization;
use glitchtip_mcp::common::env_loader::load_env_optional;
use glitchtip_mcp::config::{DEFAULT_HOST, HOST_ENV_VAR, TOKEN_ENV_VAR};
use glitchtip_mcp::{ApiClient, GlitchTipConfig, GlitchTipError};

/// Check names
pub mod check_names {
    pub const API_TOKEN: &str = "API token";
    pub const HOST_URL: &str = "GlitchTip host";
    pub const API_CONNECTIVITY: &str = "API connectivity";
}

/// Host the server would use, and where it came from
pub fn resolve_host(host_override: Option<&str>) -> (String, HostSource) {
    if let Some(host) = host_override.filter(|h| !h.trim().is_empty()) {
        return (host.to_string(), HostSource::Flag);
    }
    match load_env_optional(HOST_ENV_VAR) {
        Some(host) => (host, HostSource::Environment),
        None => (DEFAULT_HOST.to_string(), HostSource::Default),
    }
}

/// Report whether a token could be found
pub fn check_token(checks: &mut Vec<Check>, config: &glitchtip_mcp::Result<GlitchTipConfig>) {
    let check = match config {
        Ok(_) => Check::new(check_names::API_TOKEN, CheckStatus::Ok)
            .with_message("Token provided")
            .build(),
        Err(GlitchTipError::Config(reason)) => Check::new(check_names::API_TOKEN, CheckStatus::Error)
            .with_message(reason.clone())
            .with_fix(format!(
                "Create an API token in GlitchTip under Profile > Auth Tokens and export it as {TOKEN_ENV_VAR}, or pass --token"
            ))
            .build(),
        Err(e) => Check::new(check_names::API_TOKEN, CheckStatus::Error)
            .with_message(e.to_string())
            .build(),
    };
    checks.push(check);
}

/// Report on the host URL
pub fn check_host(checks: &mut Vec<Check>, host: &str, source: HostSource) {
    let lower = host.to_ascii_lowercase();

    let check = if !lower.starts_with("http://") && !lower.starts_with("https://") {
        Check::new(check_names::HOST_URL, CheckStatus::Error)
            .with_message(format!("{host} is not an http(s) URL (from {source})"))
            .with_fix(format!(
                "Set {HOST_ENV_VAR} to the server URL, e.g. https://glitchtip.example.com"
            ))
            .build()
    } else if source == HostSource::Default {
        Check::new(check_names::HOST_URL, CheckStatus::Warning)
            .with_message(format!("{HOST_ENV_VAR} not set, using {host}"))
            .with_fix(format!("Set {HOST_ENV_VAR} if your server is not local"))
            .build()
    } else {
        Check::new(check_names::HOST_URL, CheckStatus::Ok)
            .with_message(format!("{host} (from {source})"))
            .build()
    };
    checks.push(check);
}

/// Ask the server for the organizations the token can see
pub async fn check_connectivity(checks: &mut Vec<Check>, api: &ApiClient) {
    let check = match api.get_json::<Vec<Organization>>("/organizations/").await {
        Ok(orgs) if orgs.is_empty() => Check::new(check_names::API_CONNECTIVITY, CheckStatus::Warning)
            .with_message("Connected, but the token sees no organizations")
            .with_fix("Check that the token's user is a member of an organization")
            .build(),
        Ok(orgs) => Check::new(check_names::API_CONNECTIVITY, CheckStatus::Ok)
            .with_message(format!("Connected, {} organization(s) visible", orgs.len()))
            .build(),
        Err(e) if matches!(e.status(), Some(401) | Some(403)) => {
            Check::new(check_names::API_CONNECTIVITY, CheckStatus::Error)
                .with_message(format!("Token rejected by the server ({e})"))
                .with_fix(format!("Create a new API token and update {TOKEN_ENV_VAR}"))
                .build()
        }
        Err(e) => Check::new(check_names::API_CONNECTIVITY, CheckStatus::Error)
            .with_message(e.to_string())
            .with_fix(format!(
                "Check that {HOST_ENV_VAR} points at a running GlitchTip server"
            ))
            .build(),
    };
    checks.push(check);
}

/// Connectivity cannot be tested without a configuration
pub fn skip_connectivity(checks: &mut Vec<Check>) {
    checks.push(
        Check::new(check_names::API_CONNECTIVITY, CheckStatus::Warning)
            .with_message("Skipped, no valid configuration")
            .build(),
    );
}
