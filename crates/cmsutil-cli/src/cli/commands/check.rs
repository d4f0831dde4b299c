//! `cmsutil check` – run the startup settings validation.

use anyhow::Result;
use cmsutil_core::config::CmsSettings;
use cmsutil_core::urlutils::UrlConfig;
use cmsutil_core::validate;

pub fn run_check(cfg: &CmsSettings) -> Result<()> {
    validate::ready(cfg)?;
    UrlConfig::from_settings(cfg)?;
    println!("Settings OK.");
    Ok(())
}
