//! Weather query service - orchestrates provider lookups

use std::{fmt, sync::Arc};

use domain::{CityName, GeoLocation, WeatherReport};
use tracing::{instrument, warn};

use crate::{error::ApplicationError, ports::WeatherProviderPort};

/// Service for answering weather queries
///
/// One query in, one report out. Provider-side failures are wrapped into the
/// single `QueryFailed` kind; the underlying cause is logged here and not
/// re-raised as a distinct kind to the caller.
pub struct WeatherQueryService {
    provider: Arc<dyn WeatherProviderPort>,
}

impl fmt::Debug for WeatherQueryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherQueryService").finish_non_exhaustive()
    }
}

impl WeatherQueryService {
    /// Create a new weather query service
    pub fn new(provider: Arc<dyn WeatherProviderPort>) -> Self {
        Self { provider }
    }

    /// Get current weather for a city name
    #[instrument(skip(self), fields(city = %city))]
    pub async fn by_city(&self, city: &CityName) -> Result<WeatherReport, ApplicationError> {
        self.provider
            .fetch_by_city(city)
            .await
            .map_err(|err| Self::wrap(err, city.as_str(), "city name"))
    }

    /// Get current weather for a coordinate pair
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn by_coordinates(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        self.provider
            .fetch_by_coordinates(location)
            .await
            .map_err(|err| Self::wrap(err, &format!("coordinates {location}"), "coordinates"))
    }

    /// Wrap a provider-side failure into the semantic query failure
    ///
    /// Transport failures get a remediation message naming the query; decode
    /// and empty-payload failures get a generic processing message. Anything
    /// else passes through unchanged for the boundary to treat as unexpected.
    fn wrap(err: ApplicationError, query: &str, hint: &str) -> ApplicationError {
        match err {
            ApplicationError::ExternalService(cause) => {
                warn!(%query, %cause, "provider request failed");
                ApplicationError::QueryFailed(format!(
                    "Failed to fetch weather data for {query}. Please check the {hint} and try again."
                ))
            }
            ApplicationError::InvalidResponse(cause) => {
                warn!(%query, %cause, "provider response could not be processed");
                ApplicationError::QueryFailed("Failed to process weather data response.".to_string())
            }
            other => other,
        }
    }
}
