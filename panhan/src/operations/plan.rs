//! Plan types for conversion runs.
//!
//! A plan lists every converter invocation a run will make, fully resolved,
//! before any of them is started.

use crate::args::{converter_args, filters_to_list};
use crate::config::DocumentConfig;
use std::path::{Path, PathBuf};

/// One converter invocation for one front-matter fragment.
///
/// # Examples
///
/// ```
/// use panhan::operations::ConversionJob;
///
/// let job = ConversionJob {
///     output_format: Some("html".into()),
///     output_file: Some("out.html".into()),
///     ..ConversionJob::new("doc.md")
/// };
/// assert_eq!(job.arguments(), vec!["doc.md", "--to", "html", "--output", "out.html"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// The markdown source.
    pub source: PathBuf,

    /// Target format; `None` lets the converter infer it.
    pub output_format: Option<String>,

    /// Output path; `None` means the converter writes to stdout.
    pub output_file: Option<PathBuf>,

    /// Serialized flags and variables.
    pub extra_args: Vec<String>,

    /// Enabled filters, in order.
    pub filters: Vec<String>,
}

impl ConversionJob {
    /// A job converting `source` with no settings.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_format: None,
            output_file: None,
            extra_args: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Build a job from a fully resolved configuration.
    #[must_use]
    pub fn from_config(source: &Path, config: &DocumentConfig) -> Self {
        Self {
            source: source.to_path_buf(),
            output_format: config.output_format.clone(),
            output_file: config.output_file.clone(),
            extra_args: converter_args(config),
            filters: filters_to_list(&config.filters),
        }
    }

    /// Converter arguments, excluding the program itself.
    ///
    /// `<source> [--to FMT] [--output FILE] <extra args...> [--filter NAME...]`
    #[must_use]
    pub fn arguments(&self) -> Vec<String> {
        let mut args = vec![self.source.display().to_string()];
        if let Some(format) = &self.output_format {
            args.push("--to".to_string());
            args.push(format.clone());
        }
        if let Some(file) = &self.output_file {
            args.push("--output".to_string());
            args.push(file.display().to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        for filter in &self.filters {
            args.push("--filter".to_string());
            args.push(filter.clone());
        }
        args
    }

    /// The full command as it would be typed.
    #[must_use]
    pub fn command_line(&self, program: &str) -> String {
        let mut parts = vec![program.to_string()];
        parts.extend(self.arguments());
        parts.join(" ")
    }

    /// Returns true if the converter's output is captured and printed.
    #[must_use]
    pub fn writes_to_stdout(&self) -> bool {
        self.output_file.is_none()
    }

    /// Returns a human-readable description of this job.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "Convert {} to {} -> {}",
            self.source.display(),
            self.output_format.as_deref().unwrap_or("default format"),
            self.output_file
                .as_ref()
                .map_or_else(|| "stdout".to_string(), |p| p.display().to_string())
        )
    }
}

/// A complete conversion plan.
///
/// # Examples
///
/// ```
/// use panhan::operations::{ConversionJob, ConversionPlan};
///
/// let plan = ConversionPlan::new("Process 1 source")
///     .add_job(ConversionJob::new("doc.md"))
///     .add_warning("nothing to worry about");
///
/// assert_eq!(plan.len(), 1);
/// assert!(plan.has_warnings());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConversionPlan {
    /// A human-readable description of the run.
    pub description: String,

    /// Jobs in execution order.
    pub jobs: Vec<ConversionJob>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl ConversionPlan {
    /// Creates an empty plan with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            jobs: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds a job to the plan.
    #[must_use]
    pub fn add_job(mut self, job: ConversionJob) -> Self {
        self.jobs.push(job);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Returns true if the plan has no jobs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Returns the number of jobs in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if the plan has warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
