//! Weather query handlers
//!
//! Both endpoints validate their parameters into domain value objects before
//! touching the service, so malformed input never triggers an outbound
//! provider request.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use domain::{CityName, GeoLocation, WeatherReport};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for a coordinate lookup
#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    /// Latitude (-90 to 90)
    pub latitude: f64,
    /// Longitude (-180 to 180)
    pub longitude: f64,
}

/// Current weather for a city
///
/// GET /weather/{city}
#[instrument(skip(state), fields(city = %city))]
pub async fn get_by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>, ApiError> {
    let city = CityName::new(&city).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let report = state.weather_service.by_city(&city).await?;
    Ok(Json(report))
}

/// Current weather for a coordinate pair
///
/// GET /weather/coordinates?latitude={lat}&longitude={lon}
#[instrument(skip(state), fields(lat = query.latitude, lon = query.longitude))]
pub async fn get_by_coordinates(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    let location = GeoLocation::new(query.latitude, query.longitude)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let report = state.weather_service.by_coordinates(&location).await?;
    Ok(Json(report))
}
