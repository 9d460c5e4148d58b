use std::sync::Arc;

use crate::config::Config;
use crate::render::{pdf::PdfBackend, RenderBackend};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Rendering backend shared by every composition. Stateless, so one instance serves
    /// concurrent requests.
    pub backend: Arc<dyn RenderBackend>,
}

impl AppState {
    /// State backed by the built-in PDF writer.
    pub fn new(config: Config) -> AppState {
        AppState {
            config,
            backend: Arc::new(PdfBackend::new()),
        }
    }
}
