//! Command to print a starter `panhan.yaml`.

use crate::error::CliError;
use crate::utils::{current_user, user_config_path, GlobalOptions};
use std::io::{self, Write};

/// Print a configuration template to stdout.
pub struct TemplateCommand;

impl TemplateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let template = panhan::config::render_template(&user_config_path(), &current_user());
        let mut stdout = io::stdout().lock();
        stdout.write_all(template.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
