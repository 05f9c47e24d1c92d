//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GuardConfig;

/// Error type for configuration loading.
///
/// Every variant is fatal to startup: a configuration the loader cannot
/// fully accept never serves traffic.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A directive that admits only one value appeared twice in the same
    /// scope. Detected before any merge, never resolved as last-write-wins.
    #[error("duplicate \"{0}\" directive in the same scope")]
    DuplicateDirective(&'static str),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GuardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    load_config_str(&content)
}

/// Parse configuration from a TOML string.
pub fn load_config_str(content: &str) -> Result<GuardConfig, ConfigError> {
    let config: GuardConfig = toml::from_str(content)?;
    Ok(config)
}
