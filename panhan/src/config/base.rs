//! Preset lookup and inheritance.
//!
//! Presets are stored raw in [`BaseConfig`] and validated when they are
//! looked up. A preset naming a parent through `use_preset` is combined
//! over the fully resolved parent, to any depth.

use crate::config::schema::{BaseConfig, DocumentConfig};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use log::{debug, info};

/// Name of the preset applied beneath every document.
pub const DEFAULT_PRESET: &str = "default";

impl BaseConfig {
    /// Resolve `name` into a fully inherited [`DocumentConfig`].
    ///
    /// If `name` is not defined, `default` is returned when given.
    ///
    /// # Errors
    ///
    /// - [`Error::PresetNotFound`] if `name` (or any ancestor) is undefined
    ///   and no default was given; ancestors never fall back to a default
    /// - [`Error::CyclicPreset`] if the inheritance chain loops
    /// - validation errors from the preset's raw settings
    ///
    /// # Examples
    ///
    /// ```
    /// use panhan::config::BaseConfig;
    ///
    /// let config: BaseConfig = serde_yaml::from_str(r#"
    /// presets:
    ///   base:
    ///     output_format: html
    ///   report:
    ///     use_preset: base
    ///     output_file: report.html
    /// "#).unwrap();
    ///
    /// let report = config.get_preset("report", None).unwrap();
    /// assert_eq!(report.output_format.as_deref(), Some("html"));
    /// assert_eq!(report.output_file, Some("report.html".into()));
    /// ```
    pub fn get_preset(&self, name: &str, default: Option<DocumentConfig>) -> Result<DocumentConfig> {
        debug!("get_preset(name={name:?}, default={default:?})");

        if !self.presets.contains_key(name) {
            if let Some(default) = default {
                debug!("Preset '{name}' not defined, using supplied default");
                return Ok(default);
            }
            return Err(self.not_found(name));
        }

        let mut chain = Vec::new();
        let resolved = self.resolve_chain(name, &mut chain)?;
        info!("Resolved preset '{name}'");
        Ok(resolved)
    }

    /// Resolve the `default` preset, or the empty config if it is undefined.
    ///
    /// # Errors
    ///
    /// Returns an error if `default` exists but is invalid or inherits from
    /// a missing or cyclic preset.
    pub fn get_default_preset(&self) -> Result<DocumentConfig> {
        self.get_preset(DEFAULT_PRESET, Some(DocumentConfig::default()))
    }

    /// Preset names in definition order.
    #[must_use]
    pub fn preset_names(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    fn resolve_chain(&self, name: &str, chain: &mut Vec<String>) -> Result<DocumentConfig> {
        if chain.iter().any(|seen| seen == name) {
            let mut cycle = chain.clone();
            cycle.push(name.to_string());
            return Err(Error::CyclicPreset { chain: cycle });
        }

        let raw = self.presets.get(name).ok_or_else(|| self.not_found(name))?;
        let config = ConfigValidator::document_config(&format!("preset '{name}'"), raw)?;

        let Some(parent) = config.use_preset.clone() else {
            return Ok(config);
        };

        debug!("Preset '{name}' inherits from '{parent}'");
        chain.push(name.to_string());
        let parent_config = self.resolve_chain(&parent, chain)?;
        chain.pop();

        Ok(config.combine(&parent_config))
    }

    fn not_found(&self, name: &str) -> Error {
        Error::PresetNotFound {
            name: name.to_string(),
            available: self.preset_names(),
        }
    }
}
