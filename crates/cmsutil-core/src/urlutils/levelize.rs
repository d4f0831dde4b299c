//! Hierarchical path decomposition.

use regex::Regex;
use std::sync::OnceLock;

use super::InvalidPathError;

/// Absolute or relative path made of `[a-zA-Z0-9_.-]` segments.
fn any_path_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/?[a-zA-Z0-9_.-]+(/[a-zA-Z0-9_.-]+)*/?$").unwrap())
}

/// Returns true if `path` matches the permissive path grammar.
pub fn is_valid_path(path: &str) -> bool {
    any_path_re().is_match(path)
}

/// Splits `path` into its prefixes, dropping the last level at each step.
///
/// Trailing slashes are stripped first; empty prefixes are omitted, so an
/// absolute path does not yield a bare `""` entry.
///
/// # Examples
///
/// - `levelize_path("/application/item/new")` →
///   `["/application/item/new", "/application/item", "/application"]`
/// - `levelize_path("docs/")` → `["docs"]`
pub fn levelize_path(path: &str) -> Result<Vec<String>, InvalidPathError> {
    if path.is_empty() {
        return Err(InvalidPathError::Empty);
    }
    if !is_valid_path(path) {
        return Err(InvalidPathError::Malformed(path.to_string()));
    }

    let parts: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    let paths = (1..=parts.len())
        .rev()
        .map(|i| parts[..i].join("/"))
        .filter(|sub_path| !sub_path.is_empty())
        .collect();
    Ok(paths)
}
