//! Canonical weather report entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The normalized weather record served to callers
///
/// Decoupled from the provider's raw schema; produced fresh per query with no
/// identity beyond the single response. Serializes to the wire shape
/// `{location, temperature, description, humidity, windSpeed, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Resolved location name (provider area name or caller fallback)
    pub location: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Human-readable weather description
    pub description: String,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// When normalization completed (UTC), not provider-reported
    pub timestamp: DateTime<Utc>,
}
