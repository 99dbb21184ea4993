//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherQueryService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather query service
    pub weather_service: Arc<WeatherQueryService>,
}
