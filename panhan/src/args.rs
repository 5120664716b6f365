//! Serialization of resolved settings into converter arguments.
//!
//! Every function here is pure and preserves the insertion order of its
//! input mapping, so the same configuration always yields the same argument
//! list.

use crate::config::{DocumentConfig, FilterMap, Scalar, ScalarMap};
use log::debug;

/// Turn an option name into a command-line flag.
///
/// Underscores become hyphens. Single-character names get one dash, all
/// others get two.
///
/// # Examples
///
/// ```
/// use panhan::args::format_flag;
///
/// assert_eq!(format_flag("N"), "-N");
/// assert_eq!(format_flag("toc_depth"), "--toc-depth");
/// ```
#[must_use]
pub fn format_flag(name: &str) -> String {
    let flag = name.replace('_', "-");
    if flag.chars().count() > 1 {
        format!("--{flag}")
    } else {
        format!("-{flag}")
    }
}

/// Render a flag value as a single token.
///
/// Strings are trimmed and wrapped in double quotes if they still contain
/// whitespace; other scalars use their textual form.
///
/// # Examples
///
/// ```
/// use panhan::args::format_value;
/// use panhan::config::Scalar;
///
/// assert_eq!(format_value(&Scalar::from("  My Document  ")), "\"My Document\"");
/// assert_eq!(format_value(&Scalar::Integer(2)), "2");
/// ```
#[must_use]
pub fn format_value(value: &Scalar) -> String {
    match value {
        Scalar::String(text) => {
            let text = text.trim();
            if text.contains(char::is_whitespace) {
                format!("\"{text}\"")
            } else {
                text.to_string()
            }
        }
        other => other.to_string(),
    }
}

/// Serialize converter flags.
///
/// `true` emits the flag alone, `false` suppresses it, and any other value
/// emits the flag followed by its formatted value. Empty tokens are dropped.
///
/// # Examples
///
/// ```
/// use panhan::args::pandoc_args_to_list;
/// use panhan::config::{Scalar, ScalarMap};
///
/// let mut flags = ScalarMap::new();
/// flags.insert("standalone".into(), Scalar::Bool(true));
/// flags.insert("toc".into(), Scalar::Bool(false));
/// flags.insert("toc_depth".into(), Scalar::Integer(2));
///
/// assert_eq!(pandoc_args_to_list(&flags), vec!["--standalone", "--toc-depth", "2"]);
/// ```
#[must_use]
pub fn pandoc_args_to_list(flags: &ScalarMap) -> Vec<String> {
    let mut tokens = Vec::with_capacity(flags.len() * 2);
    for (name, value) in flags {
        match value {
            Scalar::Bool(false) => {}
            Scalar::Bool(true) => tokens.push(format_flag(name)),
            other => {
                tokens.push(format_flag(name));
                tokens.push(format_value(other));
            }
        }
    }
    tokens.retain(|token| !token.is_empty());
    tokens
}

/// Serialize template variables as `-V`, `name="value"` pairs.
///
/// # Examples
///
/// ```
/// use panhan::args::variables_to_list;
/// use panhan::config::{Scalar, ScalarMap};
///
/// let mut variables = ScalarMap::new();
/// variables.insert("title".into(), Scalar::from("My Document"));
///
/// assert_eq!(variables_to_list(&variables), vec!["-V", "title=\"My Document\""]);
/// ```
#[must_use]
pub fn variables_to_list(variables: &ScalarMap) -> Vec<String> {
    variables
        .iter()
        .flat_map(|(name, value)| ["-V".to_string(), format!("{name}=\"{value}\"")])
        .collect()
}

/// Names of enabled filters, in order.
///
/// # Examples
///
/// ```
/// use panhan::args::filters_to_list;
/// use panhan::config::FilterMap;
///
/// let mut filters = FilterMap::new();
/// filters.insert("pandoc-crossref".into(), true);
/// filters.insert("citeproc".into(), false);
///
/// assert_eq!(filters_to_list(&filters), vec!["pandoc-crossref"]);
/// ```
#[must_use]
pub fn filters_to_list(filters: &FilterMap) -> Vec<String> {
    filters
        .iter()
        .filter(|(_, enabled)| **enabled)
        .map(|(name, _)| name.clone())
        .collect()
}

/// Extra converter arguments for a resolved config: flags, then variables.
#[must_use]
pub fn converter_args(config: &DocumentConfig) -> Vec<String> {
    let mut args = pandoc_args_to_list(&config.pandoc_args);
    args.extend(variables_to_list(&config.variables));
    debug!("converter_args -> {args:?}");
    args
}
