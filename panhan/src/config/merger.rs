//! Configuration merging and precedence handling.
//!
//! Layers are combined left-biased: the receiver of [`DocumentConfig::combine`]
//! wins over its argument. Mapping fields are merged key by key, so a
//! lower layer can contribute keys the higher layer never mentions.

use crate::config::schema::DocumentConfig;
use indexmap::IndexMap;
use log::trace;

impl DocumentConfig {
    /// Combine `self` with a lower-precedence `other`.
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: `self`'s value if set, else `other`'s
    /// - Mapping fields: `self`'s keys override `other`'s; keys only in
    ///   `other` are kept
    /// - Key order: `other`'s keys first (in `other`'s order), then keys
    ///   only present in `self`
    ///
    /// Chain calls highest precedence first:
    /// `document.combine(&preset).combine(&default)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use panhan::config::DocumentConfig;
    ///
    /// let high = DocumentConfig { output_format: Some("pdf".into()), ..Default::default() };
    /// let low = DocumentConfig {
    ///     output_format: Some("html".into()),
    ///     output_file: Some("out.html".into()),
    ///     ..Default::default()
    /// };
    ///
    /// let merged = high.combine(&low);
    /// assert_eq!(merged.output_format.as_deref(), Some("pdf"));
    /// assert_eq!(merged.output_file, Some("out.html".into()));
    /// ```
    #[must_use]
    pub fn combine(&self, other: &DocumentConfig) -> DocumentConfig {
        trace!("Combining {self:?} over {other:?}");

        DocumentConfig {
            use_preset: pick(&self.use_preset, &other.use_preset, |s| s.is_empty()),
            output_format: pick(&self.output_format, &other.output_format, |s| s.is_empty()),
            output_file: pick(&self.output_file, &other.output_file, |p| {
                p.as_os_str().is_empty()
            }),
            variables: merge_map(&self.variables, &other.variables),
            pandoc_args: merge_map(&self.pandoc_args, &other.pandoc_args),
            filters: merge_map(&self.filters, &other.filters),
        }
    }
}

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use panhan::config::{ConfigMerger, DocumentConfig};
///
/// let cli = DocumentConfig { output_file: Some("cli.html".into()), ..Default::default() };
/// let doc = DocumentConfig { output_file: Some("doc.html".into()), ..Default::default() };
///
/// let merged = ConfigMerger::merge([&cli, &doc]);
/// assert_eq!(merged.output_file, Some("cli.html".into()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from highest to lowest precedence.
    ///
    /// An empty iterator yields the empty config.
    #[must_use]
    pub fn merge<'a, I>(layers: I) -> DocumentConfig
    where
        I: IntoIterator<Item = &'a DocumentConfig>,
    {
        layers
            .into_iter()
            .fold(DocumentConfig::default(), |merged, layer| merged.combine(layer))
    }
}

/// First of `high`, `low` that is set and not empty.
fn pick<T: Clone>(high: &Option<T>, low: &Option<T>, is_empty: impl Fn(&T) -> bool) -> Option<T> {
    high.iter()
        .chain(low.iter())
        .find(|value| !is_empty(*value))
        .cloned()
}

/// Shallow merge where `high`'s values win.
fn merge_map<V: Clone>(
    high: &IndexMap<String, V>,
    low: &IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = low.clone();
    for (key, value) in high {
        // insert keeps the existing position for keys already present
        merged.insert(key.clone(), value.clone());
    }
    merged
}
