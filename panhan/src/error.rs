//! Error types for the panhan library.
//!
//! This module provides the error hierarchy for configuration loading,
//! preset resolution and converter invocation, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a panhan error.
///
/// # Examples
///
/// ```
/// use panhan::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("html".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the panhan library.
///
/// Every failure is a deterministic misconfiguration or a converter failure;
/// none of them are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// No configuration file was found in any of the searched locations.
    #[error("configuration file not found, searched: {}", display_paths(.searched))]
    ConfigNotFound {
        /// Every path that was checked, in search order.
        searched: Vec<PathBuf>,
    },

    /// A named preset does not exist and no usable default was supplied.
    #[error("preset not found: '{name}'. Available presets: {}", display_list(.available))]
    PresetNotFound {
        /// The requested preset name.
        name: String,
        /// All preset names defined in the configuration.
        available: Vec<String>,
    },

    /// A preset inherits from itself, directly or through other presets.
    #[error("cyclic preset reference: {}", .chain.join(" -> "))]
    CyclicPreset {
        /// The inheritance chain, ending with the repeated preset name.
        chain: Vec<String>,
    },

    /// A configuration fragment contains keys outside the allow-list.
    #[error(
        "unexpected key(s) in {context}: {}. Valid keys are: {}",
        display_list(.invalid),
        display_list(.valid)
    )]
    UnknownKeys {
        /// Where the fragment came from (e.g. "preset 'report'").
        context: String,
        /// The unrecognized keys, sorted.
        invalid: Vec<String>,
        /// The full set of accepted keys.
        valid: Vec<String>,
    },

    /// A YAML configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The converter executable could not be located.
    #[error("converter not found: '{program}'")]
    ConverterNotFound {
        /// The program name or path that was looked up.
        program: String,
    },

    /// The converter ran but exited unsuccessfully.
    #[error("converter '{program}' failed ({status}): {stderr}")]
    ConverterFailed {
        /// The program that was executed.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error output.
        stderr: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn display_paths(paths: &[PathBuf]) -> String {
    let shown: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("[{}]", shown.join(", "))
}

impl Error {
    /// Check if error indicates something the user asked for does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use panhan::Error;
    ///
    /// let err = Error::PresetNotFound { name: "report".into(), available: vec![] };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. } | Self::PresetNotFound { .. } | Self::InvalidPath { .. }
        )
    }

    /// Check if error is caused by malformed configuration content.
    ///
    /// # Examples
    ///
    /// ```
    /// use panhan::Error;
    ///
    /// let err = Error::CyclicPreset { chain: vec!["a".into(), "a".into()] };
    /// assert!(err.is_schema());
    /// ```
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            Self::UnknownKeys { .. }
                | Self::Configuration(_)
                | Self::Validation { .. }
                | Self::CyclicPreset { .. }
        )
    }

    /// Check if error came from the external converter.
    #[must_use]
    pub fn is_delegate_failure(&self) -> bool {
        matches!(
            self,
            Self::ConverterNotFound { .. } | Self::ConverterFailed { .. }
        )
    }
}
