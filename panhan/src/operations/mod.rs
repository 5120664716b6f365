//! Conversion runs using the plan-execute pattern.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: reads front matter, resolves every fragment against the
//!    presets and serializes the result into a [`ConversionJob`]
//! 2. **Execution**: hands each job to a [`Converter`](crate::converter::Converter)
//!
//! Planning fails as a whole before any converter is started, so a typo in
//! the last source never leaves the first half of a batch converted.
//!
//! # Examples
//!
//! ```no_run
//! use panhan::config::ConfigLoader;
//! use panhan::converter::PandocConverter;
//! use panhan::operations::{PlanExecutor, ProcessOptions, ProcessPlan};
//!
//! let source = ConfigLoader::load(None).unwrap();
//! let options = ProcessOptions::new(vec!["report.md".into()]);
//!
//! // Generate plan
//! let plan = ProcessPlan::new(options).build_plan(&source.config).unwrap();
//!
//! // Execute plan
//! let converter = PandocConverter::locate(source.config.pandoc_path.as_deref()).unwrap();
//! let result = PlanExecutor::new(&converter)
//!     .execute(&plan, &mut std::io::stdout())
//!     .unwrap();
//! assert_eq!(result.actions_taken.len(), plan.len());
//! ```

pub mod executor;
pub mod plan;
pub mod process;

#[cfg(test)]
mod proptests;

pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{ConversionJob, ConversionPlan};
pub use process::{ProcessOptions, ProcessPlan};
