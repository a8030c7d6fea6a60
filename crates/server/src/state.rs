use crate::config::Config;
use std::sync::Arc;
use tax_forms::{Capabilities, TemplateStore};

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Fillable templates, read per request
    pub templates: Arc<dyn TemplateStore>,

    /// Rendering backends, fixed at startup
    pub capabilities: Capabilities,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let templates: Arc<dyn TemplateStore> = Arc::new(config.template_store());
        Self {
            templates,
            capabilities: config.capabilities(),
            config: Arc::new(config),
        }
    }
}
