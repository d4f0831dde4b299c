//! `cmsutil media <path> --host <host>` – classify a request against media_url.

use anyhow::Result;
use cmsutil_core::config::CmsSettings;
use cmsutil_core::urlutils::{is_media_request, RequestParts, UrlConfig};

pub fn run_media(cfg: &CmsSettings, path: &str, host: &str) -> Result<()> {
    let url_cfg = UrlConfig::from_settings(cfg)?;
    let request = RequestParts::new(path, host);
    let media = is_media_request(&url_cfg, &request);
    tracing::debug!(path, host, media, "classified request");
    println!("{}", if media { "media" } else { "not media" });
    Ok(())
}
