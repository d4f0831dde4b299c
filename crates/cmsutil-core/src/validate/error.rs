//! Error type for startup settings validation.

use thiserror::Error;

/// The host framework is configured in a way the CMS cannot run with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImproperlyConfigured {
    #[error("the CMS needs `{0}` in template_context_processors to work correctly")]
    MissingContextProcessor(String),

    #[error("the CMS needs `{0}` in installed_apps")]
    MissingApp(String),

    #[error(
        "`{replacement}` replaces `{replaced}`; remove `{replaced}` from middleware_classes"
    )]
    ConflictingMiddleware {
        replacement: String,
        replaced: String,
    },

    #[error("the CMS requires a newer `{app}` (it must provide `{capability}`)")]
    OutdatedDependency { app: String, capability: String },
}
