//! Main entry point for the panhan CLI.
//!
//! Converts markdown documents with pandoc, using presets defined in
//! `panhan.yaml` and selected from each document's front matter.

mod cli;
mod commands;
mod error;
mod utils;

use clap::{CommandFactory, Parser};
use cli::Cli;

fn main() {
    // Without arguments there is nothing to do, so show usage
    if std::env::args_os().len() < 2 {
        let mut command = Cli::command();
        let code = i32::from(command.print_help().is_err());
        std::process::exit(code);
    }

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = panhan::init_logger(cli.verbose, cli.debug);

    let (global, command) = cli.into_parts();

    // Execute the command
    let result = match command {
        cli::Command::Completions(cmd) => cmd.execute(&global),
        cli::Command::Template(cmd) => cmd.execute(&global),
        cli::Command::Process(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
