//! Startup checks that the host framework settings suit the CMS.
//!
//! [`ready`] is the hook to call once settings are loaded; it runs the
//! dependency checks first and then the settings checks, stopping at the
//! first failure.

mod error;

use crate::config::CmsSettings;

pub use error::ImproperlyConfigured;

pub const REQUEST_CONTEXT_PROCESSOR: &str = "django.core.context_processors.request";
pub const TREE_APP: &str = "mptt";
pub const MULTILINGUAL_MIDDLEWARE: &str = "cms.middleware.multilingual.MultilingualURLMiddleware";
pub const LOCALE_MIDDLEWARE: &str = "django.middleware.locale.LocaleMiddleware";
pub const REVERSION_APP: &str = "reversion";
pub const REVERSION_URLS_CAPABILITY: &str = "get_urls";

/// Answers questions about installed applications and what they provide.
pub trait DependencyProbe {
    fn is_installed(&self, app: &str) -> bool;
    fn has_capability(&self, app: &str, capability: &str) -> bool;
}

/// [`DependencyProbe`] backed by `installed_apps` and `app_capabilities`.
#[derive(Debug, Clone, Copy)]
pub struct InstalledApps<'a> {
    settings: &'a CmsSettings,
}

impl<'a> InstalledApps<'a> {
    pub fn new(settings: &'a CmsSettings) -> Self {
        Self { settings }
    }
}

impl DependencyProbe for InstalledApps<'_> {
    fn is_installed(&self, app: &str) -> bool {
        self.settings.installed_apps.iter().any(|a| a == app)
    }

    fn has_capability(&self, app: &str, capability: &str) -> bool {
        self.settings
            .app_capabilities
            .get(app)
            .is_some_and(|caps| caps.iter().any(|c| c == capability))
    }
}

fn contains(list: &[String], item: &str) -> bool {
    list.iter().any(|x| x == item)
}

/// Checks context processors, required apps and middleware conflicts.
pub fn validate_settings(settings: &CmsSettings) -> Result<(), ImproperlyConfigured> {
    if !contains(&settings.template_context_processors, REQUEST_CONTEXT_PROCESSOR) {
        return Err(ImproperlyConfigured::MissingContextProcessor(
            REQUEST_CONTEXT_PROCESSOR.to_string(),
        ));
    }
    if !InstalledApps::new(settings).is_installed(TREE_APP) {
        return Err(ImproperlyConfigured::MissingApp(TREE_APP.to_string()));
    }
    if contains(&settings.middleware_classes, MULTILINGUAL_MIDDLEWARE)
        && contains(&settings.middleware_classes, LOCALE_MIDDLEWARE)
    {
        return Err(ImproperlyConfigured::ConflictingMiddleware {
            replacement: MULTILINGUAL_MIDDLEWARE.to_string(),
            replaced: LOCALE_MIDDLEWARE.to_string(),
        });
    }
    Ok(())
}

/// Checks that optional dependencies, when installed, are recent enough.
pub fn validate_dependencies<P: DependencyProbe + ?Sized>(
    probe: &P,
) -> Result<(), ImproperlyConfigured> {
    if probe.is_installed(REVERSION_APP)
        && !probe.has_capability(REVERSION_APP, REVERSION_URLS_CAPABILITY)
    {
        return Err(ImproperlyConfigured::OutdatedDependency {
            app: REVERSION_APP.to_string(),
            capability: REVERSION_URLS_CAPABILITY.to_string(),
        });
    }
    Ok(())
}

/// Runs all startup checks against `settings`.
pub fn ready(settings: &CmsSettings) -> Result<(), ImproperlyConfigured> {
    let result = validate_dependencies(&InstalledApps::new(settings))
        .and_then(|()| validate_settings(settings));
    match &result {
        Ok(()) => tracing::debug!("settings validated"),
        Err(e) => tracing::warn!("improperly configured: {}", e),
    }
    result
}
