//! Common test utilities for integration tests.
//!
//! This module provides fixture builders and a recording converter for
//! testing the panhan library without a real pandoc.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use panhan::{ConversionJob, Converter, Result};

/// A representative `panhan.yaml`.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r"
presets:
  default:
    output_format: html
    variables:
      author: House Style
    pandoc_args:
      standalone: true
  report:
    use_preset: default
    output_file: report.html
    variables:
      title: Quarterly Report
    filters:
      pandoc-crossref: true
  slides:
    use_preset: report
    output_format: revealjs
    output_file: slides.html
    filters:
      pandoc-crossref: false
      citeproc: true
pandoc_path: null
";

/// A temporary project directory holding a config and markdown sources.
///
/// The directory is removed when the fixture is dropped.
#[allow(dead_code)]
pub struct ProjectFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl ProjectFixture {
    /// Creates an empty project directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates a project with [`SAMPLE_CONFIG`] written to `panhan.yaml`.
    pub fn with_sample_config() -> Self {
        let fixture = Self::new();
        fixture.write_config(SAMPLE_CONFIG);
        fixture
    }

    /// Root of the project.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `panhan.yaml` and returns its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write("panhan.yaml", contents)
    }

    /// Writes a markdown source whose front matter lists `fragments`.
    pub fn write_doc(&self, name: &str, fragments: &str) -> PathBuf {
        self.write(name, &format!("---\ntitle: {name}\npanhan:\n{fragments}---\n\n# {name}\n"))
    }

    /// Writes an arbitrary file relative to the project root.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

/// A converter that records jobs and echoes their arguments.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingConverter {
    jobs: RefCell<Vec<ConversionJob>>,
}

#[allow(dead_code)]
impl RecordingConverter {
    /// Creates a converter with no recorded jobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs received so far, in order.
    pub fn jobs(&self) -> Vec<ConversionJob> {
        self.jobs.borrow().clone()
    }
}

impl Converter for RecordingConverter {
    fn program(&self) -> String {
        "pandoc".to_string()
    }

    fn convert(&self, job: &ConversionJob) -> Result<String> {
        self.jobs.borrow_mut().push(job.clone());
        Ok(format!("{}\n", job.arguments().join(" ")))
    }
}
