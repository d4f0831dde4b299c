use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Host framework settings the CMS reads, loaded from `~/.config/cmsutil/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsSettings {
    /// Whether generated URLs get a trailing slash.
    pub append_slash: bool,
    /// Base URL (path, optionally with scheme and host) media files are served from.
    pub media_url: String,
    /// Dotted paths of the enabled template context processors.
    pub template_context_processors: Vec<String>,
    /// Names of the installed applications.
    pub installed_apps: Vec<String>,
    /// Dotted paths of the enabled middleware, in order.
    pub middleware_classes: Vec<String>,
    /// Capabilities each installed application exposes, e.g. `reversion = ["get_urls"]`.
    pub app_capabilities: BTreeMap<String, Vec<String>>,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            append_slash: true,
            media_url: "/media/".to_string(),
            template_context_processors: vec![
                "django.contrib.auth.context_processors.auth".to_string(),
                "django.core.context_processors.request".to_string(),
                "cms.context_processors.media".to_string(),
            ],
            installed_apps: vec!["cms".to_string(), "mptt".to_string(), "menus".to_string()],
            middleware_classes: vec![
                "django.middleware.common.CommonMiddleware".to_string(),
                "django.contrib.sessions.middleware.SessionMiddleware".to_string(),
                "cms.middleware.page.CurrentPageMiddleware".to_string(),
            ],
            app_capabilities: BTreeMap::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cmsutil")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CmsSettings> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CmsSettings::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<CmsSettings> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: CmsSettings =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
