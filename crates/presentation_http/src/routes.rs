//! Route definitions

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
///
/// The static `/weather/coordinates` segment takes precedence over the
/// `/weather/{city}` capture, so a city literally named "coordinates" is not
/// reachable by path.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather API
        .route("/weather/{city}", get(handlers::weather::get_by_city))
        .route(
            "/weather/coordinates",
            get(handlers::weather::get_by_coordinates),
        )
        // Static frontend
        .fallback_service(ServeDir::new("static"))
        // Attach state
        .with_state(state)
}
