//! Shell completion generation.
//!
//! Prints a completion script for bash, zsh, fish, `PowerShell` or elvish
//! to stdout, with installation hints on stderr.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Name of the installed binary.
const BIN_NAME: &str = "panhan";

/// Generate a shell completion script.
pub struct CompletionsCommand {
    /// Shell to generate completions for
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("#   panhan --completions bash > ~/.local/share/bash-completion/completions/panhan");
            }
            Shell::Zsh => {
                eprintln!("#   panhan --completions zsh > ~/.zsh/completions/_panhan");
            }
            Shell::Fish => {
                eprintln!("#   panhan --completions fish > ~/.config/fish/completions/panhan.fish");
            }
            Shell::PowerShell => {
                eprintln!("#   panhan --completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        let mut stdout = io::stdout().lock();
        generate(self.shell, &mut cmd, BIN_NAME, &mut stdout);
        stdout.flush()?;
        Ok(())
    }
}
