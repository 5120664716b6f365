//! Planning for the `process` run.
//!
//! Each source contributes one job per front-matter fragment, or a single
//! job when a preset is forced from the command line.

use crate::config::{BaseConfig, ConfigResolver, DocumentConfig, FrontmatterConfigList};
use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::plan::{ConversionJob, ConversionPlan};

/// Options for a process run.
#[derive(Debug, Clone, Default)]
pub struct ProcessOptions {
    /// Markdown sources, processed in order.
    pub sources: Vec<PathBuf>,

    /// Preset to use instead of each document's front matter.
    pub preset: Option<String>,

    /// Output path overriding every fragment's `output_file`.
    pub output: Option<PathBuf>,
}

impl ProcessOptions {
    /// Creates options for the given sources.
    ///
    /// # Examples
    ///
    /// ```
    /// use panhan::operations::ProcessOptions;
    ///
    /// let options = ProcessOptions::new(vec!["doc.md".into()]).with_preset(Some("report".into()));
    /// assert_eq!(options.preset.as_deref(), Some("report"));
    /// assert!(options.output.is_none());
    /// ```
    #[must_use]
    pub fn new(sources: Vec<PathBuf>) -> Self {
        Self {
            sources,
            preset: None,
            output: None,
        }
    }

    /// Sets the forced preset.
    #[must_use]
    pub fn with_preset(mut self, preset: Option<String>) -> Self {
        self.preset = preset;
        self
    }

    /// Sets the output override.
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// The CLI override layer.
    #[must_use]
    pub fn overrides(&self) -> DocumentConfig {
        DocumentConfig {
            output_file: self.output.clone(),
            ..Default::default()
        }
        .normalized()
    }
}

/// A process plan generator.
///
/// # Examples
///
/// ```no_run
/// use panhan::config::ConfigLoader;
/// use panhan::operations::{ProcessOptions, ProcessPlan};
///
/// let source = ConfigLoader::load(None).unwrap();
/// let options = ProcessOptions::new(vec!["doc.md".into()]);
/// let plan = ProcessPlan::new(options).build_plan(&source.config).unwrap();
/// println!("{} conversions planned", plan.len());
/// ```
pub struct ProcessPlan {
    options: ProcessOptions,
}

impl ProcessPlan {
    /// Creates a new process plan with the given options.
    #[must_use]
    pub const fn new(options: ProcessOptions) -> Self {
        Self { options }
    }

    /// Resolve every fragment of every source into a job.
    ///
    /// Sources without panhan front matter are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns the first error from reading a source, validating its front
    /// matter, or resolving a fragment; no partial plan is returned.
    pub fn build_plan(&self, base: &BaseConfig) -> Result<ConversionPlan> {
        let count = self.options.sources.len();
        let mut plan = ConversionPlan::new(format!(
            "Process {count} source{}",
            if count == 1 { "" } else { "s" }
        ));

        let overrides = self.options.overrides();
        for source in &self.options.sources {
            info!("Processing source: {}", source.display());

            let fragments = self.fragments_for(source)?;
            if fragments.is_empty() {
                let message =
                    format!("{} has no panhan front matter, skipping", source.display());
                warn!("{message}");
                plan = plan.add_warning(message);
                continue;
            }

            for fragment in &fragments {
                let layered = ConfigResolver::apply_override(&overrides, fragment);
                let resolved = ConfigResolver::resolve(&layered, base)?;
                let job = ConversionJob::from_config(source, &resolved);
                debug!("Planned: {}", job.description());
                plan = plan.add_job(job);
            }
        }

        for path in duplicate_outputs(&plan.jobs) {
            let message = format!(
                "multiple conversions write to {}, later ones overwrite earlier ones",
                path.display()
            );
            warn!("{message}");
            plan = plan.add_warning(message);
        }

        Ok(plan)
    }

    fn fragments_for(&self, source: &Path) -> Result<FrontmatterConfigList> {
        let Some(preset) = &self.options.preset else {
            return FrontmatterConfigList::from_file(source);
        };

        if !source.is_file() {
            return Err(Error::InvalidPath {
                path: source.to_path_buf(),
                reason: "Source file does not exist".into(),
            });
        }

        debug!("Using preset '{preset}' instead of front matter");
        Ok(FrontmatterConfigList::from(vec![DocumentConfig {
            use_preset: Some(preset.clone()),
            ..Default::default()
        }]))
    }
}

/// Output paths targeted by more than one job, in first-seen order.
fn duplicate_outputs(jobs: &[ConversionJob]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for path in jobs.iter().filter_map(|job| job.output_file.as_deref()) {
        if !seen.insert(path) && reported.insert(path) {
            duplicates.push(path.to_path_buf());
        }
    }
    duplicates
}
