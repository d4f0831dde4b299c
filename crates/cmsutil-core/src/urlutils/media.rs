//! Media request classification.

use url::Url;

use super::{MediaUrlError, UrlConfig};

/// The parts of an incoming request needed to classify it.
///
/// Implement this for the web framework's request type; [`RequestParts`] is
/// a plain owned version.
pub trait RequestInfo {
    /// Request path, without query string.
    fn path(&self) -> &str;
    /// Host the request was addressed to, including a non-default port.
    fn host(&self) -> &str;
}

/// Owned request descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParts {
    pub path: String,
    pub host: String,
}

impl RequestParts {
    pub fn new(path: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            host: host.into(),
        }
    }
}

impl RequestInfo for RequestParts {
    fn path(&self) -> &str {
        &self.path
    }

    fn host(&self) -> &str {
        &self.host
    }
}

/// `media_url` split into the path prefix and the optional authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl {
    pub path: String,
    /// `[user[:password]@]host[:port]`; `None` for a bare path.
    pub netloc: Option<String>,
}

impl MediaUrl {
    /// Parses a media URL.
    ///
    /// `scheme://host/path` and `//host/path` keep their authority; anything
    /// without one (e.g. `/media/`) is taken as a bare path. Query and fragment
    /// are dropped. The URL is only validated by the URL parser: path and
    /// authority are kept exactly as written, without percent-encoding, case
    /// folding or default-port removal.
    pub fn parse(raw: &str) -> Result<Self, MediaUrlError> {
        let checked = if raw.starts_with("//") {
            Url::parse(&format!("http:{raw}"))
        } else {
            Url::parse(raw)
        };
        match checked {
            Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {}
            Err(source) => {
                return Err(MediaUrlError {
                    url: raw.to_string(),
                    source,
                })
            }
        }

        let end = raw.find(&['?', '#'][..]).unwrap_or(raw.len());
        let (netloc, path) = split_authority(&raw[..end]);
        Ok(Self {
            path: path.to_string(),
            netloc: netloc.filter(|n| !n.is_empty()).map(str::to_string),
        })
    }

    /// Literal string-prefix match on the path (`/media` also matches
    /// `/mediaXYZ`), plus an exact host match when an authority is set.
    pub fn matches<R: RequestInfo + ?Sized>(&self, request: &R) -> bool {
        if !request.path().starts_with(&self.path) {
            return false;
        }
        match &self.netloc {
            Some(netloc) => request.host() == netloc,
            None => true,
        }
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Splits `[scheme:][//authority]path` into authority and path.
fn split_authority(url: &str) -> (Option<&str>, &str) {
    let rest = match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => url,
    };
    match rest.strip_prefix("//") {
        Some(authority_path) => {
            let slash = authority_path.find('/').unwrap_or(authority_path.len());
            (Some(&authority_path[..slash]), &authority_path[slash..])
        }
        None => (None, rest),
    }
}

/// Returns true if `request` falls under the configured media URL.
pub fn is_media_request<R: RequestInfo + ?Sized>(config: &UrlConfig, request: &R) -> bool {
    config.media_url.matches(request)
}
