//! Configuration system for panhan.
//!
//! Conversion settings come in layers that all share the
//! [`DocumentConfig`] shape:
//!
//! - presets defined in `panhan.yaml` ([`BaseConfig`]), which may inherit
//!   from one another through `use_preset`
//! - fragments listed under the `panhan` key of a document's front matter
//!   ([`FrontmatterConfigList`])
//! - overrides built from command-line flags
//!
//! # Resolution Precedence
//!
//! Highest to lowest:
//!
//! 1. CLI overrides
//! 2. The front-matter fragment
//! 3. The preset the fragment names (with its ancestors beneath it)
//! 4. The `default` preset
//!
//! # Examples
//!
//! ```
//! use panhan::config::{BaseConfig, ConfigResolver, FrontmatterConfigList};
//!
//! let base: BaseConfig = serde_yaml::from_str(r#"
//! presets:
//!   default:
//!     output_format: html
//!   report:
//!     output_file: report.html
//! "#).unwrap();
//!
//! let doc = "---\npanhan:\n  - use_preset: report\n  - output_format: pdf\n---\n";
//! let fragments = FrontmatterConfigList::from_markdown(doc).unwrap();
//!
//! let resolved: Vec<_> = fragments
//!     .iter()
//!     .map(|fragment| ConfigResolver::resolve(fragment, &base).unwrap())
//!     .collect();
//!
//! assert_eq!(resolved[0].output_format.as_deref(), Some("html"));
//! assert_eq!(resolved[0].output_file, Some("report.html".into()));
//! assert_eq!(resolved[1].output_format.as_deref(), Some("pdf"));
//! ```

pub mod base;
pub mod frontmatter;
pub mod loader;
pub mod merger;
pub mod resolver;
pub mod schema;
pub mod template;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use base::DEFAULT_PRESET;
pub use frontmatter::{extract_front_matter, FrontmatterConfigList, FRONTMATTER_KEY};
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILENAME};
pub use merger::ConfigMerger;
pub use resolver::ConfigResolver;
pub use schema::{
    BaseConfig, DocumentConfig, FilterMap, Scalar, ScalarMap, BASE_CONFIG_KEYS,
    DOCUMENT_CONFIG_KEYS,
};
pub use template::render_template;
pub use validator::ConfigValidator;
