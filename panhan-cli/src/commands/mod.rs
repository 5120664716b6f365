//! CLI command implementations.
//!
//! - `completions`: Print a shell completion script
//! - `process`: Convert markdown sources with their presets
//! - `template`: Print a starter `panhan.yaml`

pub mod completions;
pub mod process;
pub mod template;

pub use completions::CompletionsCommand;
pub use process::ProcessCommand;
pub use template::TemplateCommand;
