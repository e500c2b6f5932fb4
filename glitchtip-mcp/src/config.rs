//! Configuration for the GlitchTip connection
//!
//! The configuration is read once at startup and then handed to the API
//! client by `Arc`. Nothing else in the crate reads the environment.

use crate::common::env_loader::EnvLoader;
use crate::error::{GlitchTipError, Result};
use std::fmt;

/// Prefix shared by all environment variables this crate reads
pub const ENV_PREFIX: &str = "GLITCHTIP";

/// Environment variable holding the server URL
pub const HOST_ENV_VAR: &str = "GLITCHTIP_HOST";

/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "GLITCHTIP_TOKEN";

/// Server used when `GLITCHTIP_HOST` is not set
pub const DEFAULT_HOST: &str = "http://localhost:18000";

/// Versioned API root appended to the host
pub const API_ROOT: &str = "/api/0";

/// Connection settings for a GlitchTip server
#[derive(Clone, PartialEq, Eq)]
pub struct GlitchTipConfig {
    base_url: String,
    token: String,
}

impl GlitchTipConfig {
    /// Create a configuration from explicit values.
    ///
    /// A trailing `/` on `base_url` is dropped. The token must not be empty;
    /// no other validation is performed on either value.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(GlitchTipError::Config(format!(
                "{TOKEN_ENV_VAR} environment variable is required"
            )));
        }

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { base_url, token })
    }

    /// Load the configuration from `GLITCHTIP_HOST` and `GLITCHTIP_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_overrides(None, None)
    }

    /// Load the configuration, letting explicit values win over the environment.
    ///
    /// Precedence is override, then environment, then [`DEFAULT_HOST`] for the
    /// URL. A missing token is a [`GlitchTipError::Config`].
    pub fn from_env_with_overrides(host: Option<String>, token: Option<String>) -> Result<Self> {
        let loader = EnvLoader::new(ENV_PREFIX);

        let base_url = host
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| loader.load_string("HOST", DEFAULT_HOST));

        let token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| loader.load_optional("TOKEN"))
            .ok_or_else(|| {
                GlitchTipError::Config(format!("{TOKEN_ENV_VAR} environment variable is required"))
            })?;

        tracing::debug!("Using GlitchTip server at {}", base_url);
        Self::new(base_url, token)
    }

    /// Server URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Root that every endpoint path is appended to
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url, API_ROOT)
    }

    /// Full URL for an endpoint path such as `/organizations/`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_root(), endpoint)
    }
}

impl fmt::Debug for GlitchTipConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlitchTipConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var(HOST_ENV_VAR);
        env::remove_var(TOKEN_ENV_VAR);
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = GlitchTipConfig::new("http://glitchtip.test/", "secret").unwrap();
        assert_eq!(config.base_url(), "http://glitchtip.test");
        assert_eq!(
            config.endpoint_url("/organizations/"),
            "http://glitchtip.test/api/0/organizations/"
        );
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let err = GlitchTipConfig::new(DEFAULT_HOST, "  ").unwrap_err();
        assert!(matches!(err, GlitchTipError::Config(_)));
        assert!(err.to_string().contains(TOKEN_ENV_VAR));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = GlitchTipConfig::new(DEFAULT_HOST, "super-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    #[serial]
    fn test_from_env_requires_token() {
        clear_env();
        let err = GlitchTipConfig::from_env().unwrap_err();
        assert!(matches!(err, GlitchTipError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_from_env_uses_default_host() {
        clear_env();
        env::set_var(TOKEN_ENV_VAR, "abc123");

        let config = GlitchTipConfig::from_env().unwrap();
        assert_eq!(config.base_url(), DEFAULT_HOST);
        assert_eq!(config.token(), "abc123");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_reads_host() {
        clear_env();
        env::set_var(HOST_ENV_VAR, "https://errors.example.com/");
        env::set_var(TOKEN_ENV_VAR, "abc123");

        let config = GlitchTipConfig::from_env().unwrap();
        assert_eq!(config.base_url(), "https://errors.example.com");
        assert_eq!(config.api_root(), "https://errors.example.com/api/0");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_win_over_env() {
        clear_env();
        env::set_var(HOST_ENV_VAR, "https://from-env.test");
        env::set_var(TOKEN_ENV_VAR, "env-token");

        let config = GlitchTipConfig::from_env_with_overrides(
            Some("https://from-flag.test".to_string()),
            Some("flag-token".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://from-flag.test");
        assert_eq!(config.token(), "flag-token");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_override_falls_back_to_env() {
        clear_env();
        env::set_var(TOKEN_ENV_VAR, "env-token");

        let config =
            GlitchTipConfig::from_env_with_overrides(Some(String::new()), Some(String::new()))
                .unwrap();
        assert_eq!(config.base_url(), DEFAULT_HOST);
        assert_eq!(config.token(), "env-token");

        clear_env();
    }
}
