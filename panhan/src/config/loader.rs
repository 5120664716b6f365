//! Configuration file discovery and loading.
//!
//! `panhan.yaml` is looked up in a fixed order and the first file found
//! wins; an explicitly supplied path skips discovery entirely.

use crate::config::schema::BaseConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use log::{debug, info};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the global configuration.
pub const CONFIG_FILENAME: &str = "panhan.yaml";

/// A loaded configuration together with the file it came from.
///
/// # Examples
///
/// ```
/// use panhan::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let source = ConfigSource {
///     path: PathBuf::from("panhan.yaml"),
///     config: Default::default(),
/// };
/// assert!(source.config.presets.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: BaseConfig,
}

/// Loads `panhan.yaml`.
///
/// # Examples
///
/// ```no_run
/// use panhan::config::ConfigLoader;
///
/// let source = ConfigLoader::load(None).unwrap();
/// println!("Loaded {} presets from {}", source.config.presets.len(), source.path.display());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Candidate locations, highest priority first.
    ///
    /// 1. `{cwd}/panhan.yaml`
    /// 2. `{home}/.config/panhan.yaml`
    /// 3. `{home}/panhan.yaml`
    #[must_use]
    pub fn search_paths(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = vec![cwd.join(CONFIG_FILENAME)];
        if let Some(home) = home {
            paths.push(Self::user_config_path(home));
            paths.push(home.join(CONFIG_FILENAME));
        }
        paths
    }

    /// User-level configuration path under `home`.
    #[must_use]
    pub fn user_config_path(home: &Path) -> PathBuf {
        home.join(".config").join(CONFIG_FILENAME)
    }

    /// Return the first existing file among [`ConfigLoader::search_paths`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] listing every searched path.
    pub fn discover(cwd: &Path, home: Option<&Path>) -> Result<PathBuf> {
        let searched = Self::search_paths(cwd, home);
        for candidate in &searched {
            debug!("Looking for configuration at {}", candidate.display());
            if candidate.is_file() {
                return Ok(candidate.clone());
            }
        }
        Err(Error::ConfigNotFound { searched })
    }

    /// Resolve the configuration path from an explicit path or by search
    /// from the process working directory and home directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `explicit` is not an existing file,
    /// or [`Error::ConfigNotFound`] if discovery finds nothing.
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "Configuration file does not exist".into(),
                });
            }
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir()?;
        Self::discover(&cwd, home::home_dir().as_deref())
    }

    /// Read and validate a configuration file.
    ///
    /// An empty file yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails validation.
    pub fn load_file(path: &Path) -> Result<BaseConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            debug!("{} is empty", path.display());
            return Ok(BaseConfig::default());
        }

        let raw: Value = serde_yaml::from_str(&contents)?;
        ConfigValidator::base_config(&path.display().to_string(), &raw)
    }

    /// Locate and load the configuration.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ConfigLoader::locate`] and
    /// [`ConfigLoader::load_file`].
    pub fn load(explicit: Option<&Path>) -> Result<ConfigSource> {
        let path = Self::locate(explicit)?;
        let config = Self::load_file(&path)?;
        info!(
            "Loaded configuration from {} ({} presets)",
            path.display(),
            config.presets.len()
        );
        Ok(ConfigSource { path, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_search_order() {
        let paths = ConfigLoader::search_paths(Path::new("/work"), Some(Path::new("/home/me")));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/work/panhan.yaml"),
                PathBuf::from("/home/me/.config/panhan.yaml"),
                PathBuf::from("/home/me/panhan.yaml"),
            ]
        );
    }

    #[test]
    fn test_search_without_home() {
        let paths = ConfigLoader::search_paths(Path::new("/work"), None);
        assert_eq!(paths, vec![PathBuf::from("/work/panhan.yaml")]);
    }

    #[test]
    fn test_discover_prefers_cwd() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::write(cwd.path().join(CONFIG_FILENAME), "presets: {}\n").unwrap();
        fs::write(home.path().join(CONFIG_FILENAME), "presets: {}\n").unwrap();

        let found = ConfigLoader::discover(cwd.path(), Some(home.path())).unwrap();
        assert_eq!(found, cwd.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_user_config_before_home() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        fs::create_dir(home.path().join(".config")).unwrap();
        fs::write(ConfigLoader::user_config_path(home.path()), "presets: {}\n").unwrap();
        fs::write(home.path().join(CONFIG_FILENAME), "presets: {}\n").unwrap();

        let found = ConfigLoader::discover(cwd.path(), Some(home.path())).unwrap();
        assert_eq!(found, home.path().join(".config").join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_nothing_lists_searched() {
        let cwd = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();

        match ConfigLoader::discover(cwd.path(), Some(home.path())) {
            Err(Error::ConfigNotFound { searched }) => assert_eq!(searched.len(), 3),
            other => panic!("Expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_explicit_missing() {
        let result = ConfigLoader::locate(Some(Path::new("/nonexistent/panhan.yaml")));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_locate_explicit_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let result = ConfigLoader::locate(Some(dir.path()));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "presets:\n  default:\n    output_format: html\npandoc_path: /usr/bin/pandoc\n",
        )
        .unwrap();

        let source = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(source.path, path);
        assert_eq!(source.config.preset_names(), vec!["default".to_string()]);
        assert_eq!(source.config.pandoc_path, Some(PathBuf::from("/usr/bin/pandoc")));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "\n").unwrap();

        let config = ConfigLoader::load_file(&path).unwrap();
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "presets: [unclosed\n").unwrap();

        let result = ConfigLoader::load_file(&path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_unknown_top_level_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "presets: {}\ntheme: dark\n").unwrap();

        let result = ConfigLoader::load_file(&path);
        assert!(matches!(result, Err(Error::UnknownKeys { .. })));
    }
}
