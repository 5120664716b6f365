//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! panhan has no subcommands: it either prints the configuration template
//! or processes the given sources.

use crate::commands::{CompletionsCommand, ProcessCommand, TemplateCommand};
use crate::utils::GlobalOptions;
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Convert markdown documents with pandoc using presets from panhan.yaml.
#[derive(Parser)]
#[command(name = "panhan")]
#[command(version, about = "Convert markdown with inheritable pandoc presets", long_about = None)]
pub struct Cli {
    /// Markdown source file(s) to convert
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,

    /// Path to panhan.yaml (default: search the current, config and home directories)
    #[arg(
        long = "panhan-yaml",
        visible_alias = "config",
        value_name = "PATH",
        env = "PANHAN_YAML"
    )]
    pub panhan_yaml: Option<PathBuf>,

    /// Use this preset instead of the documents' front matter
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Write output to this path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a panhan.yaml template and exit
    #[arg(long)]
    pub print_yaml_template: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Print the converter commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Explain what is being done
    #[arg(long)]
    pub verbose: bool,

    /// Print debug output
    #[arg(long)]
    pub debug: bool,
}

/// What a parsed invocation asks for.
pub enum Command {
    /// Print a shell completion script
    Completions(CompletionsCommand),

    /// Print the configuration template
    Template(TemplateCommand),

    /// Convert source files
    Process(ProcessCommand),
}

impl Cli {
    /// Split the parsed arguments into global options and the command to run.
    pub fn into_parts(self) -> (GlobalOptions, Command) {
        let global = GlobalOptions {
            verbose: self.verbose,
            debug: self.debug,
            panhan_yaml: self.panhan_yaml,
        };

        let command = if let Some(shell) = self.completions {
            Command::Completions(CompletionsCommand { shell })
        } else if self.print_yaml_template {
            Command::Template(TemplateCommand)
        } else {
            Command::Process(ProcessCommand {
                sources: self.sources,
                preset: self.preset,
                output: self.output,
                dry_run: self.dry_run,
            })
        };

        (global, command)
    }
}
