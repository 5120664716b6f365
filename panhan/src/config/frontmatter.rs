//! Document configuration embedded in markdown front matter.
//!
//! A source file opts in by listing fragments under the `panhan` key of its
//! YAML front matter. Each fragment describes one output artifact:
//!
//! ```yaml
//! ---
//! title: Quarterly Report
//! panhan:
//!   - use_preset: report
//!   - use_preset: slides
//!     output_file: report-slides.html
//! ---
//! ```

use crate::config::schema::DocumentConfig;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use log::debug;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Front-matter key holding panhan fragments.
pub const FRONTMATTER_KEY: &str = "panhan";

/// Ordered document configurations found in one source file.
///
/// # Examples
///
/// ```
/// use panhan::config::FrontmatterConfigList;
///
/// let source = "---\npanhan:\n  - output_format: html\n  - output_format: pdf\n---\n# Hi\n";
/// let list = FrontmatterConfigList::from_markdown(source).unwrap();
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontmatterConfigList {
    configs: Vec<DocumentConfig>,
}

impl FrontmatterConfigList {
    /// Validate raw fragments into document configs.
    ///
    /// # Errors
    ///
    /// Returns the first validation error, naming the fragment's index.
    pub fn from_values(fragments: &[Value]) -> Result<Self> {
        let configs = fragments
            .iter()
            .enumerate()
            .map(|(i, fragment)| {
                ConfigValidator::document_config(&format!("front matter fragment {i}"), fragment)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { configs })
    }

    /// Extract and validate the `panhan` fragments of a markdown document.
    ///
    /// A document without front matter, or whose front matter has no
    /// `panhan` key, yields an empty list. A single mapping under the key is
    /// treated as a one-element list.
    ///
    /// # Errors
    ///
    /// Returns an error if the front matter is not valid YAML, the `panhan`
    /// value is neither a sequence nor a mapping, or a fragment is invalid.
    pub fn from_markdown(source: &str) -> Result<Self> {
        let Some(block) = extract_front_matter(source) else {
            debug!("No front matter found");
            return Ok(Self::default());
        };

        let metadata: Value = serde_yaml::from_str(&block)?;
        let Some(entry) = metadata.get(FRONTMATTER_KEY) else {
            debug!("Front matter has no '{FRONTMATTER_KEY}' key");
            return Ok(Self::default());
        };

        match entry {
            Value::Null => Ok(Self::default()),
            Value::Sequence(fragments) => Self::from_values(fragments),
            Value::Mapping(_) => Self::from_values(std::slice::from_ref(entry)),
            _ => Err(Error::Validation {
                field: FRONTMATTER_KEY.into(),
                message: "expected a list of document configs".into(),
            }),
        }
    }

    /// Read a markdown file and extract its fragments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read, otherwise
    /// the errors of [`FrontmatterConfigList::from_markdown`].
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading front matter from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read source file: {e}"),
        })?;
        Self::from_markdown(&contents)
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns true if the document declares no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Iterate over fragments in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentConfig> {
        self.configs.iter()
    }
}

impl From<Vec<DocumentConfig>> for FrontmatterConfigList {
    fn from(configs: Vec<DocumentConfig>) -> Self {
        Self { configs }
    }
}

impl IntoIterator for FrontmatterConfigList {
    type Item = DocumentConfig;
    type IntoIter = std::vec::IntoIter<DocumentConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.configs.into_iter()
    }
}

impl<'a> IntoIterator for &'a FrontmatterConfigList {
    type Item = &'a DocumentConfig;
    type IntoIter = std::slice::Iter<'a, DocumentConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.configs.iter()
    }
}

/// Return the YAML text between the opening `---` line and the closing
/// `---` or `...` line.
///
/// The opening delimiter must be the first line (a leading byte order mark
/// is ignored). An unterminated block is not front matter.
///
/// # Examples
///
/// ```
/// use panhan::config::extract_front_matter;
///
/// assert_eq!(extract_front_matter("---\na: 1\n---\nbody").as_deref(), Some("a: 1"));
/// assert_eq!(extract_front_matter("# no front matter"), None);
/// ```
#[must_use]
pub fn extract_front_matter(source: &str) -> Option<String> {
    let mut lines = source.trim_start_matches('\u{feff}').lines();
    if lines.next().map(str::trim_end) != Some("---") {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(block.join("\n"));
        }
        block.push(line);
    }
    None
}
