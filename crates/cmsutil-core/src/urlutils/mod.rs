//! URL and path helpers.
//!
//! Pure functions over strings. The settings they depend on (`append_slash`,
//! `media_url`) are passed in through [`UrlConfig`] instead of being read from
//! process-wide state.

mod error;
mod join;
mod levelize;
mod media;
mod params;

pub use error::{InvalidPathError, MediaUrlError};
pub use join::urljoin;
pub use levelize::{is_valid_path, levelize_path};
pub use media::{is_media_request, MediaUrl, RequestInfo, RequestParts};
pub use params::{add_url_parameters, UrlParams};

use crate::config::CmsSettings;

/// Settings consumed by the URL helpers, with `media_url` parsed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlConfig {
    pub append_slash: bool,
    pub media_url: MediaUrl,
}

impl UrlConfig {
    pub fn new(append_slash: bool, media_url: &str) -> Result<Self, MediaUrlError> {
        Ok(Self {
            append_slash,
            media_url: MediaUrl::parse(media_url)?,
        })
    }

    pub fn from_settings(settings: &CmsSettings) -> Result<Self, MediaUrlError> {
        Self::new(settings.append_slash, &settings.media_url)
    }

    /// [`urljoin`] using this config's `append_slash`.
    pub fn join<S: AsRef<str>>(&self, segments: &[S]) -> String {
        urljoin(segments, self.append_slash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_settings() {
        let cfg = UrlConfig::from_settings(&CmsSettings::default()).unwrap();
        assert!(cfg.append_slash);
        assert_eq!(cfg.media_url.path, "/media/");
        assert_eq!(cfg.media_url.netloc, None);
        assert_eq!(cfg.join(&["a", "b"]), "a/b/");
    }

    #[test]
    fn invalid_media_url() {
        let settings = CmsSettings {
            media_url: "http://[::1/media/".to_string(),
            ..CmsSettings::default()
        };
        assert!(UrlConfig::from_settings(&settings).is_err());
    }
}
