//! Final configuration resolution.
//!
//! A document fragment is resolved against `panhan.yaml` in three tiers,
//! highest precedence first:
//!
//! 1. The fragment itself (front matter, or an override built from CLI flags)
//! 2. The preset named by the fragment's `use_preset`, fully inherited
//! 3. The `default` preset

use crate::config::schema::{BaseConfig, DocumentConfig};
use crate::error::Result;
use log::{debug, info};

/// Resolves document fragments against the base configuration.
///
/// # Examples
///
/// ```
/// use panhan::config::{BaseConfig, ConfigResolver, DocumentConfig};
///
/// let base: BaseConfig = serde_yaml::from_str(r#"
/// presets:
///   default:
///     output_format: html
///     pandoc_args:
///       standalone: true
///   report:
///     use_preset: default
///     output_file: report.html
/// "#).unwrap();
///
/// let fragment = DocumentConfig { use_preset: Some("report".into()), ..Default::default() };
/// let resolved = ConfigResolver::resolve(&fragment, &base).unwrap();
///
/// assert_eq!(resolved.output_format.as_deref(), Some("html"));
/// assert_eq!(resolved.output_file, Some("report.html".into()));
/// assert!(resolved.pandoc_args["standalone"].is_true());
/// ```
pub struct ConfigResolver;

impl ConfigResolver {
    /// Merge `document` over its preset and the default preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the named preset is missing, cyclic or invalid,
    /// or if the `default` preset is invalid.
    pub fn resolve(document: &DocumentConfig, base: &BaseConfig) -> Result<DocumentConfig> {
        debug!("resolve(document={document:?})");

        let preset = match document.use_preset.as_deref() {
            Some(name) => base.get_preset(name, None)?,
            None => DocumentConfig::default(),
        };
        let default = base.get_default_preset()?;

        let resolved = document.combine(&preset).combine(&default);
        info!(
            "Resolved config: format={}, output={}",
            resolved.output_format.as_deref().unwrap_or("<converter default>"),
            resolved
                .output_file
                .as_ref()
                .map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
        );
        Ok(resolved)
    }

    /// Layer a CLI override over a document fragment.
    ///
    /// The override wins on every field it sets.
    #[must_use]
    pub fn apply_override(overrides: &DocumentConfig, fragment: &DocumentConfig) -> DocumentConfig {
        overrides.combine(fragment)
    }
}
