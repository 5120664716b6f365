//! Build script for panhan-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("panhan")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown with inheritable pandoc presets")
        .long_about(
            "Convert markdown documents with pandoc, using presets defined in panhan.yaml \
             and selected from each document's front matter",
        )
        .arg(
            Arg::new("sources")
                .value_name("SOURCE")
                .help("Markdown source file(s) to convert")
                .num_args(0..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("panhan-yaml")
                .long("panhan-yaml")
                .visible_alias("config")
                .help("Path to panhan.yaml")
                .value_name("PATH")
                .env("PANHAN_YAML"),
        )
        .arg(
            Arg::new("preset")
                .long("preset")
                .help("Use this preset instead of the documents' front matter")
                .value_name("NAME"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write output to this path")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("print-yaml-template")
                .long("print-yaml-template")
                .help("Print a panhan.yaml template and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .help("Print a shell completion script and exit")
                .value_name("SHELL")
                .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the converter commands instead of running them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Explain what is being done")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Print debug output")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("panhan.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
