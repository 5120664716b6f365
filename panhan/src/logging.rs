//! Logging infrastructure for panhan.
//!
//! The library emits records through the `log` facade. This module provides
//! a simple stderr backend for it with levels selected by CLI flags or the
//! `PANHAN_LOG_MODE` environment variable.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "PANHAN_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Debug).
///
/// # Examples
///
/// ```
/// use panhan::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// assert!(LogLevel::Verbose < LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress everything, including errors.
    Quiet,
    /// Errors and warnings only.
    Normal,
    /// Progress information (`--verbose`).
    Verbose,
    /// Every operation and its arguments (`--debug`).
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose", "debug" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use panhan::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter corresponding to this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Info,
            Self::Debug => LevelFilter::Trace,
        }
    }
}

/// A stderr-based backend for the `log` facade.
///
/// Records are written as `LEVEL: message`; at the Debug level the record
/// target (module path) is included.
///
/// # Examples
///
/// ```
/// use panhan::{Logger, LogLevel};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.enabled(&log::Metadata::builder().level(log::Level::Error).build()));
/// assert!(!logger.enabled(&log::Metadata::builder().level(log::Level::Info).build()));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn format(&self, record: &Record<'_>) -> String {
        if self.level >= LogLevel::Debug {
            format!("{}: [{}] {}", record.level(), record.target(), record.args())
        } else {
            format!("{}: {}", record.level(), record.args())
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

/// Picks a log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`debug` wins over `verbose`)
/// 2. `PANHAN_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use panhan::logging::select_level;
/// use panhan::LogLevel;
///
/// assert_eq!(select_level(true, true), LogLevel::Debug);
/// assert_eq!(select_level(true, false), LogLevel::Verbose);
/// ```
#[must_use]
pub fn select_level(verbose: bool, debug: bool) -> LogLevel {
    if debug {
        return LogLevel::Debug;
    }
    if verbose {
        return LogLevel::Verbose;
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return level;
        }
    }

    LogLevel::Normal
}

/// Installs the stderr logger as the global `log` backend.
///
/// Calling this more than once keeps the first logger; the returned level is
/// always the one selected for this call.
///
/// # Examples
///
/// ```
/// use panhan::init_logger;
///
/// let level = init_logger(false, false);
/// println!("logging at {level}");
/// ```
pub fn init_logger(verbose: bool, debug: bool) -> LogLevel {
    let level = select_level(verbose, debug);
    if log::set_boxed_logger(Box::new(Logger::new(level))).is_ok() {
        log::set_max_level(level.filter());
    }
    level
}
