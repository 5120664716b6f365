//! Configuration schema definitions.
//!
//! This module defines the two configuration shapes panhan reads: the
//! per-document [`DocumentConfig`] layer (used for presets, front-matter
//! fragments and CLI overrides alike) and the root [`BaseConfig`] loaded
//! from `panhan.yaml`.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Ordered mapping of option names to scalar values.
///
/// Insertion order is preserved so the serialized argument list is stable.
pub type ScalarMap = IndexMap<String, Scalar>;

/// Ordered mapping of filter names to their enabled state.
pub type FilterMap = IndexMap<String, bool>;

/// Keys accepted in a document configuration fragment.
///
/// The first six are the canonical field names; the rest are aliases kept
/// for configuration files written against older layouts.
pub const DOCUMENT_CONFIG_KEYS: &[&str] = &[
    "use_preset",
    "output_format",
    "output_file",
    "variables",
    "pandoc_args",
    "filters",
    "metadata",
    "cli_args",
    "converter_args",
];

/// Keys accepted at the top level of `panhan.yaml`.
pub const BASE_CONFIG_KEYS: &[&str] = &["presets", "pandoc_path", "converter_path"];

/// A scalar value for a template variable or converter flag.
///
/// # Examples
///
/// ```
/// use panhan::config::Scalar;
///
/// assert_eq!(Scalar::from("My Document").to_string(), "My Document");
/// assert_eq!(Scalar::Integer(2).to_string(), "2");
/// assert!(Scalar::Bool(true).is_true());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A boolean toggle.
    Bool(bool),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
    /// A string value.
    String(String),
}

impl Scalar {
    /// Returns true only for `Scalar::Bool(true)`.
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Returns the boolean value if this scalar is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One layer of conversion settings.
///
/// A `DocumentConfig` is a preset from `panhan.yaml`, a fragment of a
/// document's front matter, or an override synthesized from CLI flags. All
/// fields are optional; `DocumentConfig::default()` is the identity for
/// [`DocumentConfig::combine`].
///
/// # Examples
///
/// ```
/// use panhan::config::DocumentConfig;
///
/// let config = DocumentConfig {
///     output_format: Some("html".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.output_format.as_deref(), Some("html"));
/// assert!(DocumentConfig::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentConfig {
    /// Name of a parent preset to inherit from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_preset: Option<String>,

    /// Target format passed to the converter (`--to`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    /// Output path; absent means the converter writes to stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,

    /// Template variables, emitted as `-V name="value"`.
    #[serde(
        default,
        alias = "metadata",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub variables: ScalarMap,

    /// Converter flags; `true` emits a bare flag, `false` suppresses it.
    #[serde(
        default,
        alias = "cli_args",
        alias = "converter_args",
        deserialize_with = "null_as_empty",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub pandoc_args: ScalarMap,

    /// Filters and whether each is enabled.
    #[serde(
        default,
        deserialize_with = "deserialize_filters",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub filters: FilterMap,
}

impl DocumentConfig {
    /// Returns true when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.use_preset.is_none()
            && self.output_format.is_none()
            && self.output_file.is_none()
            && self.variables.is_empty()
            && self.pandoc_args.is_empty()
            && self.filters.is_empty()
    }

    /// Drops empty strings and paths so they behave as absent values.
    pub(crate) fn normalized(mut self) -> Self {
        self.use_preset = self.use_preset.filter(|name| !name.trim().is_empty());
        self.output_format = self.output_format.filter(|format| !format.trim().is_empty());
        self.output_file = self.output_file.filter(|path| !path.as_os_str().is_empty());
        self
    }
}

/// Root configuration loaded from `panhan.yaml`.
///
/// Presets are kept as raw YAML and only validated when looked up, so a
/// broken preset only fails runs that actually use it.
///
/// # Examples
///
/// ```
/// use panhan::config::BaseConfig;
///
/// let config: BaseConfig = serde_yaml::from_str(
///     "presets:\n  default:\n    output_format: html\npandoc_path: null\n",
/// ).unwrap();
/// assert!(config.presets.contains_key("default"));
/// assert!(config.pandoc_path.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Preset name to raw settings.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub presets: IndexMap<String, serde_yaml::Value>,

    /// Path or name of the converter executable.
    #[serde(default, alias = "converter_path")]
    pub pandoc_path: Option<PathBuf>,
}

/// Treats an explicit YAML `null` the same as a missing key.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts filters as a toggle mapping or as a list of enabled names.
///
/// A list is migrated to a mapping with every listed filter enabled, in
/// listed order. Duplicate names in a list collapse to their first position.
fn deserialize_filters<'de, D>(deserializer: D) -> Result<FilterMap, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Toggles(FilterMap),
        Names(Vec<String>),
    }

    Ok(match Option::<Helper>::deserialize(deserializer)? {
        Some(Helper::Toggles(toggles)) => toggles,
        Some(Helper::Names(names)) => names.into_iter().map(|name| (name, true)).collect(),
        None => FilterMap::new(),
    })
}
