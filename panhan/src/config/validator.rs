//! Configuration validation.
//!
//! Raw YAML fragments are checked against a static allow-list before they
//! are deserialized, so a typo in a preset or in front matter is reported
//! with every offending key and the full set of valid keys.

use crate::config::schema::{BaseConfig, DocumentConfig, BASE_CONFIG_KEYS, DOCUMENT_CONFIG_KEYS};
use crate::error::{Error, Result};
use log::debug;
use serde_yaml::{Mapping, Value};

/// Validates raw configuration fragments.
///
/// # Examples
///
/// ```
/// use panhan::config::ConfigValidator;
///
/// let raw: serde_yaml::Value = serde_yaml::from_str("output_format: pdf").unwrap();
/// let config = ConfigValidator::document_config("front matter", &raw).unwrap();
/// assert_eq!(config.output_format.as_deref(), Some("pdf"));
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Build a [`DocumentConfig`] from a raw YAML value.
    ///
    /// `context` names the fragment's origin in error messages. A YAML
    /// `null` yields the empty config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKeys`] if the mapping has keys outside the
    /// allow-list and [`Error::Validation`] if it is not a mapping or a field
    /// has the wrong shape.
    pub fn document_config(context: &str, raw: &Value) -> Result<DocumentConfig> {
        debug!("Validating document config from {context}: {raw:?}");

        let mapping = match raw {
            Value::Null => return Ok(DocumentConfig::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(Error::Validation {
                    field: context.into(),
                    message: format!("expected a mapping, found {}", describe(other)),
                })
            }
        };

        Self::validate_keys(context, mapping, DOCUMENT_CONFIG_KEYS)?;

        let config: DocumentConfig =
            serde_yaml::from_value(raw.clone()).map_err(|e| Error::Validation {
                field: context.into(),
                message: e.to_string(),
            })?;

        Ok(config.normalized())
    }

    /// Build a [`BaseConfig`] from the parsed content of `panhan.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKeys`] for unexpected top-level keys,
    /// [`Error::Validation`] for malformed content or an empty preset name.
    pub fn base_config(context: &str, raw: &Value) -> Result<BaseConfig> {
        let mapping = match raw {
            Value::Null => return Ok(BaseConfig::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(Error::Validation {
                    field: context.into(),
                    message: format!("expected a mapping, found {}", describe(other)),
                })
            }
        };

        Self::validate_keys(context, mapping, BASE_CONFIG_KEYS)?;

        let config: BaseConfig =
            serde_yaml::from_value(raw.clone()).map_err(|e| Error::Validation {
                field: context.into(),
                message: e.to_string(),
            })?;

        if config.presets.keys().any(|name| name.trim().is_empty()) {
            return Err(Error::Validation {
                field: "presets".into(),
                message: "Preset names cannot be empty".into(),
            });
        }

        Ok(config)
    }

    /// Check every key of `mapping` against `valid`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownKeys`] listing the sorted invalid keys.
    pub fn validate_keys(context: &str, mapping: &Mapping, valid: &[&str]) -> Result<()> {
        let mut invalid: Vec<String> = mapping
            .keys()
            .map(key_name)
            .filter(|key| !valid.contains(&key.as_str()))
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }

        invalid.sort();
        invalid.dedup();
        Err(Error::UnknownKeys {
            context: context.into(),
            invalid,
            valid: valid.iter().map(|key| (*key).to_string()).collect(),
        })
    }
}

impl DocumentConfig {
    /// Validate a raw YAML mapping into a document config.
    ///
    /// # Errors
    ///
    /// See [`ConfigValidator::document_config`].
    pub fn from_mapping(raw: &Value) -> Result<Self> {
        ConfigValidator::document_config("document config", raw)
    }
}

/// Render a mapping key as text, whatever its YAML type.
fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
