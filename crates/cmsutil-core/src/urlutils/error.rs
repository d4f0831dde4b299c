//! Error types for the URL helpers.

use thiserror::Error;

/// A path was empty or did not match the permissive path grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPathError {
    #[error("path is empty")]
    Empty,
    #[error("malformed path `{0}`: expected `/`-separated segments of [a-zA-Z0-9_.-]")]
    Malformed(String),
}

/// `media_url` in the settings could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid media_url `{url}`: {source}")]
pub struct MediaUrlError {
    pub url: String,
    #[source]
    pub source: url::ParseError,
}
