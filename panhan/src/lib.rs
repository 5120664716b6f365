#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # panhan
//!
//! A library for managing inheritable pandoc presets.
//!
//! Presets live in `panhan.yaml`; markdown documents pick presets and
//! override settings in their front matter. This library merges those
//! layers into a final configuration and turns it into converter
//! arguments.
//!
//! ## Core Types
//!
//! - [`DocumentConfig`]: one layer of conversion settings, with a
//!   left-biased [`combine`](DocumentConfig::combine)
//! - [`BaseConfig`]: presets by name, resolved recursively
//! - [`ConfigResolver`]: document over preset over `default`
//! - [`ConversionPlan`] and [`PlanExecutor`]: planned and executed converter runs
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use panhan::{args, BaseConfig, ConfigResolver, DocumentConfig};
//!
//! let base: BaseConfig = serde_yaml::from_str(r#"
//! presets:
//!   default:
//!     output_format: html
//!     pandoc_args:
//!       standalone: true
//!   report:
//!     output_file: report.html
//!     variables:
//!       title: Quarterly Report
//! "#).unwrap();
//!
//! let fragment = DocumentConfig { use_preset: Some("report".into()), ..Default::default() };
//! let resolved = ConfigResolver::resolve(&fragment, &base).unwrap();
//!
//! assert_eq!(
//!     args::converter_args(&resolved),
//!     vec!["--standalone", "-V", "title=\"Quarterly Report\""]
//! );
//! ```

pub mod args;
pub mod config;
pub mod converter;
pub mod error;
pub mod logging;
pub mod operations;

// Re-export key types at crate root for convenience
pub use config::{BaseConfig, ConfigLoader, ConfigResolver, DocumentConfig, FrontmatterConfigList};
pub use converter::{Converter, PandocConverter};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    ConversionJob, ConversionPlan, ExecutionResult, PlanExecutor, ProcessOptions, ProcessPlan,
};
