//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherLookupService;
use tera::Tera;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather lookup service
    pub lookup: Arc<WeatherLookupService>,
    /// Compiled HTML templates
    pub templates: Arc<Tera>,
}
