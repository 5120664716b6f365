//! Command to convert markdown sources.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use log::debug;
use panhan::converter::{Converter, PandocConverter, DEFAULT_CONVERTER};
use panhan::operations::{PlanExecutor, ProcessOptions, ProcessPlan};
use std::io::{self, Write};
use std::path::PathBuf;

/// Convert each source once per resolved front matter fragment.
pub struct ProcessCommand {
    /// Markdown sources, in the order given
    pub sources: Vec<PathBuf>,

    /// Preset forced onto every source
    pub preset: Option<String>,

    /// Output path overriding every resolved `output_file`
    pub output: Option<PathBuf>,

    /// Print converter commands instead of running them
    pub dry_run: bool,
}

impl ProcessCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.sources.is_empty() {
            return Err(CliError::InvalidArguments(
                "no source files given".to_string(),
            ));
        }

        let source = load_configuration(global)?;
        debug!("Using configuration {}", source.path.display());

        let options = ProcessOptions::new(self.sources)
            .with_preset(self.preset)
            .with_output(self.output);
        let plan = ProcessPlan::new(options).build_plan(&source.config)?;

        // Dry runs only print command lines, so the converter need not exist
        let converter = if self.dry_run {
            PandocConverter::new(
                source
                    .config
                    .pandoc_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONVERTER)),
            )
        } else {
            PandocConverter::locate(source.config.pandoc_path.as_deref())?
        };
        debug!("Converter: {}", converter.program());

        let mut executor = PlanExecutor::new(&converter);
        if self.dry_run {
            executor = executor.dry_run();
        }

        let mut stdout = io::stdout().lock();
        let result = executor.execute(&plan, &mut stdout)?;
        stdout.flush()?;

        debug!(
            "{} conversion(s) {}",
            result.actions_taken.len(),
            if result.dry_run { "planned" } else { "completed" }
        );
        Ok(())
    }
}
