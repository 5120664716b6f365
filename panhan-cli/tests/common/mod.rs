//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated project and home directory
//! - Command builder helpers
//! - Configuration and document fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Presets used by most CLI tests.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"presets:
  default:
    output_format: html
    variables:
      author: House Style
    pandoc_args:
      standalone: true
  report:
    use_preset: default
    output_file: report.html
    filters:
      pandoc-crossref: true
"#;

/// Test environment with isolated project and home directories.
///
/// Commands run with the project as working directory and the home
/// directory pointed at an empty location, so a `panhan.yaml` belonging to
/// the machine running the tests is never picked up.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands
    pub project_dir: PathBuf,
    /// Home directory seen by commands
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty project and home directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            project_dir,
            home_dir,
        }
    }

    /// Create a test environment whose project holds [`SAMPLE_CONFIG`].
    pub fn with_sample_config() -> Self {
        let env = Self::new();
        env.write_config(SAMPLE_CONFIG);
        env
    }

    /// Get a command builder for the panhan binary, isolated from the
    /// caller's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("panhan").expect("Failed to find panhan binary");
        cmd.current_dir(&self.project_dir)
            .env("HOME", &self.home_dir)
            .env("USER", "tester")
            .env_remove("PANHAN_YAML")
            .env_remove("PANHAN_LOG_MODE");
        cmd
    }

    /// Get the project path.
    pub fn path(&self) -> &Path {
        &self.project_dir
    }

    /// Write `panhan.yaml` into the project and return its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write("panhan.yaml", contents)
    }

    /// Write a file relative to the project, creating parent directories.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.project_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a markdown document whose `panhan` front matter holds
    /// `fragments`, given as indented YAML list items.
    pub fn write_doc(&self, name: &str, fragments: &str) -> PathBuf {
        self.write(
            name,
            &format!("---\ntitle: {name}\npanhan:\n{fragments}---\n\n# {name}\n"),
        )
    }
}
