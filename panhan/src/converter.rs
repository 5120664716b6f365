//! The external document converter.
//!
//! [`Converter`] is the seam between planning and the child process; the
//! executor only ever talks to the trait, and [`PandocConverter`] is the
//! process-backed implementation.

use crate::error::{Error, Result};
use crate::operations::ConversionJob;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Converter used when `pandoc_path` is not configured.
pub const DEFAULT_CONVERTER: &str = "pandoc";

/// Runs one conversion job.
#[cfg_attr(test, mockall::automock)]
pub trait Converter {
    /// Program name or path, as shown in command lines and errors.
    fn program(&self) -> String;

    /// Run `job` and return what the converter wrote to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the converter cannot be started or exits
    /// unsuccessfully.
    fn convert(&self, job: &ConversionJob) -> Result<String>;
}

/// Invokes pandoc as a child process.
///
/// # Examples
///
/// ```
/// use panhan::converter::{Converter, PandocConverter};
///
/// let converter = PandocConverter::new("/usr/local/bin/pandoc");
/// assert_eq!(converter.program(), "/usr/local/bin/pandoc");
/// ```
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: PathBuf,
}

impl PandocConverter {
    /// Use `program` as-is, without checking that it exists.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find the converter executable.
    ///
    /// A configured path containing a directory component must point to an
    /// existing file. A bare name (or no configuration, meaning `pandoc`) is
    /// searched for on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConverterNotFound`] if the executable cannot be found.
    pub fn locate(configured: Option<&Path>) -> Result<Self> {
        let program = configured.unwrap_or_else(|| Path::new(DEFAULT_CONVERTER));
        debug!("Locating converter {}", program.display());

        let is_bare_name = program.components().count() == 1 && !program.is_absolute();
        let resolved = if is_bare_name {
            which::which(program).map_err(|e| {
                debug!("which({}) failed: {e}", program.display());
                Error::ConverterNotFound {
                    program: program.display().to_string(),
                }
            })?
        } else if program.is_file() {
            program.to_path_buf()
        } else {
            return Err(Error::ConverterNotFound {
                program: program.display().to_string(),
            });
        };

        info!("Using converter {}", resolved.display());
        Ok(Self::new(resolved))
    }
}

impl Converter for PandocConverter {
    fn program(&self) -> String {
        self.program.display().to_string()
    }

    fn convert(&self, job: &ConversionJob) -> Result<String> {
        let args = job.arguments();
        debug!("Running {} {args:?}", self.program.display());

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::ConverterNotFound {
                    program: self.program(),
                },
                _ => Error::Io(e),
            })?;

        if !output.status.success() {
            let status = output.status.code().map_or_else(
                || "terminated by signal".to_string(),
                |code| format!("exit code {code}"),
            );
            return Err(Error::ConverterFailed {
                program: self.program(),
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
