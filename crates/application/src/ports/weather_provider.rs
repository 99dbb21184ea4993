//! Weather provider port
//!
//! Defines the interface for fetching normalized weather reports from an
//! external provider.

use async_trait::async_trait;
use domain::{CityName, GeoLocation, WeatherReport};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
///
/// Implementations perform exactly one outbound call per invocation and
/// return an already-normalized report. Failures are classified as
/// `ExternalService` (transport) or `InvalidResponse` (decode/empty payload).
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherProviderPort: Send + Sync {
    /// Fetch current weather for a city name
    async fn fetch_by_city(&self, city: &CityName) -> Result<WeatherReport, ApplicationError>;

    /// Fetch current weather for a coordinate pair
    async fn fetch_by_coordinates(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError>;
}
