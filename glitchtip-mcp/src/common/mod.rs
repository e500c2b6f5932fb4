//! Common utilities shared across the crate

pub mod env_loader;

pub use env_loader::{load_env_optional, load_env_string, EnvLoader};
