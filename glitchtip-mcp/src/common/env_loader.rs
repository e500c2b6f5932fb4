//! Environment variable loading utilities
//!
//! Values that are set but empty are treated the same as unset ones, so an
//! exported `GLITCHTIP_TOKEN=` does not count as a token.

use std::env;

/// Load an environment variable, ignoring empty values
pub fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    load_env_optional(key).unwrap_or_else(|| default.to_string())
}

/// Builder for loading multiple environment variables with consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix, e.g. `GLITCHTIP_TOKEN`
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load an optional value
    pub fn load_optional(&self, suffix: &str) -> Option<String> {
        load_env_optional(&self.key(suffix))
    }
}
