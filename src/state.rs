use std::sync::Arc;

use crate::config::AppConfig;

/// Handle to the application state shared by every request handler.
pub type SharedState = Arc<AppState>;

/// Read-only application state. Nothing in here is mutated after startup.
#[derive(Debug)]
pub struct AppState {
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self { config })
    }

    /// Configuration the server was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
