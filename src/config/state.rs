// Shared application state
// Built once at startup and handed to every connection as an Arc

use super::types::Config;
use crate::render::TemplateEngine;

/// Read-only state shared across request handlers.
///
/// The template registry lives here rather than in a process-wide global so
/// the rendering component receives its configuration by injection.
pub struct AppState {
    pub config: Config,
    pub templates: TemplateEngine,
}

impl AppState {
    pub fn new(config: Config, templates: TemplateEngine) -> Self {
        Self { config, templates }
    }
}
