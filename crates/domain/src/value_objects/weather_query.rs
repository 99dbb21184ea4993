//! Weather query value object

use std::fmt;

use super::{CityName, GeoLocation};

/// A single weather lookup, either by city name or by coordinates
///
/// Constructed per incoming request from already-validated parts; never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    /// Lookup by city name
    City(CityName),
    /// Lookup by coordinate pair
    Coordinates(GeoLocation),
}

impl WeatherQuery {
    /// Location label to fall back on when the provider reports no area name
    ///
    /// City queries fall back to the caller-supplied string unmodified;
    /// coordinate queries to `"<lat>, <lon>"`.
    #[must_use]
    pub fn fallback_location(&self) -> String {
        match self {
            Self::City(city) => city.as_str().to_owned(),
            Self::Coordinates(location) => location.to_string(),
        }
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(city) => city.fmt(f),
            Self::Coordinates(location) => location.fmt(f),
        }
    }
}
