//! Plan execution engine.
//!
//! This module implements the executor that takes conversion plans and runs
//! each job through a [`Converter`].

use std::io::Write;

use log::info;

use crate::converter::Converter;
use crate::error::Result;

use super::plan::{ConversionJob, ConversionPlan};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether this was a dry run (no converter was started).
    pub dry_run: bool,

    /// Descriptions of jobs that were run (or would be run in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,
}

impl ExecutionResult {
    fn new(plan: &ConversionPlan, dry_run: bool) -> Self {
        Self {
            dry_run,
            actions_taken: plan.jobs.iter().map(ConversionJob::description).collect(),
            warnings: plan.warnings.clone(),
        }
    }
}

/// Executes conversion plans.
///
/// In normal mode each job is handed to the converter and any output the
/// converter returns for a stdout job is written to `out`. In dry-run mode
/// the planned command lines are written instead.
///
/// # Examples
///
/// ```
/// use panhan::converter::PandocConverter;
/// use panhan::operations::{ConversionJob, ConversionPlan, PlanExecutor};
///
/// let converter = PandocConverter::new("pandoc");
/// let plan = ConversionPlan::new("Process 1 source").add_job(ConversionJob::new("doc.md"));
///
/// let mut out = Vec::new();
/// let result = PlanExecutor::new(&converter).dry_run().execute(&plan, &mut out).unwrap();
///
/// assert!(result.dry_run);
/// assert_eq!(String::from_utf8(out).unwrap(), "pandoc doc.md\n");
/// ```
pub struct PlanExecutor<'a> {
    converter: &'a dyn Converter,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(converter: &'a dyn Converter) -> Self {
        Self {
            converter,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan, stopping at the first failed job.
    ///
    /// # Errors
    ///
    /// Returns the converter's error for the first failing job, or an I/O
    /// error if writing to `out` fails.
    pub fn execute(
        &self,
        plan: &ConversionPlan,
        out: &mut impl Write,
    ) -> Result<ExecutionResult> {
        info!("{}", plan.description);

        if self.dry_run {
            let program = self.converter.program();
            for job in &plan.jobs {
                writeln!(out, "{}", job.command_line(&program))?;
            }
            return Ok(ExecutionResult::new(plan, true));
        }

        for job in &plan.jobs {
            self.execute_job(job, &mut *out)?;
        }

        info!("Process completed.");
        Ok(ExecutionResult::new(plan, false))
    }

    fn execute_job(&self, job: &ConversionJob, out: &mut impl Write) -> Result<()> {
        let destination = job
            .output_file
            .as_ref()
            .map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
        info!("Writing document to: {destination}");

        let output = self.converter.convert(job)?;
        if job.writes_to_stdout() && !output.is_empty() {
            out.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
