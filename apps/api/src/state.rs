use crate::config::Config;
use crate::templates::TemplateCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only template catalog. Backed by `FsTemplateStore` in production.
    pub catalog: TemplateCatalog,
}
