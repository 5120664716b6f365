//! Starter `panhan.yaml` printed by `panhan --print-yaml-template`.

use std::path::Path;

/// Render the configuration skeleton.
///
/// `config_path` is written as a header comment naming where the file is
/// expected to live; `author` seeds the `default` preset's variables.
///
/// # Examples
///
/// ```
/// use panhan::config::render_template;
/// use std::path::Path;
///
/// let template = render_template(Path::new("/home/me/.config/panhan.yaml"), "me");
/// assert!(template.starts_with("# /home/me/.config/panhan.yaml"));
/// assert!(template.contains("author: me"));
/// ```
#[must_use]
pub fn render_template(config_path: &Path, author: &str) -> String {
    format!(
        "\
# {path}
presets:
  default:
    output_format: html
    variables:
      author: {author}
    pandoc_args:
      standalone: true

  preset_one:
    output_format: html
    output_file: output.html
    variables:
      arg1: value
      arg2: value
    pandoc_args:
      arg1: value
      arg2: value
    filters:
      filter1: true
      filter2: true

  preset_two:
    use_preset: preset_one
    filters:
      filter3: true

pandoc_path: null
",
        path = config_path.display(),
    )
}
