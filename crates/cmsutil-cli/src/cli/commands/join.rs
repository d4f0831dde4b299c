//! `cmsutil join <segments>...` – join URL segments.

use anyhow::Result;
use cmsutil_core::config::CmsSettings;
use cmsutil_core::urlutils::urljoin;

pub fn run_join(cfg: &CmsSettings, segments: &[String], no_append_slash: bool) -> Result<()> {
    let append_slash = cfg.append_slash && !no_append_slash;
    println!("{}", urljoin(segments, append_slash));
    Ok(())
}
