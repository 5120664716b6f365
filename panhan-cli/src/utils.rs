//! Utility functions for CLI operations.
//!
//! This module provides helpers shared by the CLI commands: global options,
//! configuration loading and the values baked into the config template.

use crate::error::CliError;
use panhan::config::{ConfigLoader, ConfigSource, CONFIG_FILENAME};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Enable debug output.
    pub debug: bool,

    /// Explicit path to `panhan.yaml`.
    pub panhan_yaml: Option<PathBuf>,
}

/// Load `panhan.yaml` from the explicit path or the default search.
pub fn load_configuration(global: &GlobalOptions) -> Result<ConfigSource, CliError> {
    Ok(ConfigLoader::load(global.panhan_yaml.as_deref())?)
}

/// Where the user-level configuration is expected to live.
pub fn user_config_path() -> PathBuf {
    match home::home_dir() {
        Some(home) => ConfigLoader::user_config_path(&home),
        None => PathBuf::from("~").join(".config").join(CONFIG_FILENAME),
    }
}

/// Login name of the current user, for the template's author variable.
pub fn current_user() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "author".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_config_path_ends_with_config_file() {
        let path = user_config_path();
        assert!(path.ends_with(".config/panhan.yaml"));
    }

    #[test]
    fn test_current_user_not_empty() {
        assert!(!current_user().trim().is_empty());
    }
}
