//! Weather adapter - implements WeatherProviderPort using integration_wttr

use application::error::ApplicationError;
use application::ports::WeatherProviderPort;
use async_trait::async_trait;
use domain::{CityName, GeoLocation, WeatherQuery, WeatherReport};
use integration_wttr::{WttrClient, WttrConfig, WttrError, normalize};
use tracing::{debug, instrument};

/// Adapter for wttr.in-style weather providers
#[derive(Debug, Clone)]
pub struct WttrWeatherAdapter {
    client: WttrClient,
}

impl WttrWeatherAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = WttrClient::with_defaults()
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client fails
    /// to initialize.
    pub fn with_config(config: &WttrConfig) -> Result<Self, ApplicationError> {
        let client =
            WttrClient::new(config).map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration errors into the application taxonomy
    ///
    /// Network and status failures are external-service errors; malformed or
    /// empty payloads are invalid-response errors.
    fn map_error(err: WttrError) -> ApplicationError {
        match err {
            WttrError::ConnectionFailed(e) | WttrError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            WttrError::ParseError(e) => ApplicationError::InvalidResponse(e),
            WttrError::EmptyResponse => {
                ApplicationError::InvalidResponse(WttrError::EmptyResponse.to_string())
            },
        }
    }

    async fn fetch(&self, query: WeatherQuery) -> Result<WeatherReport, ApplicationError> {
        let raw = self.client.fetch(&query).await.map_err(Self::map_error)?;
        let report =
            normalize(&raw, &query.fallback_location()).map_err(Self::map_error)?;

        debug!(
            location = %report.location,
            temperature = report.temperature,
            "Retrieved weather report"
        );
        Ok(report)
    }
}

#[async_trait]
impl WeatherProviderPort for WttrWeatherAdapter {
    #[instrument(skip(self), fields(city = city.as_str()))]
    async fn fetch_by_city(&self, city: &CityName) -> Result<WeatherReport, ApplicationError> {
        self.fetch(WeatherQuery::City(city.clone())).await
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_by_coordinates(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReport, ApplicationError> {
        self.fetch(WeatherQuery::Coordinates(*location)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        assert!(WttrWeatherAdapter::new().is_ok());
    }

    #[test]
    fn invalid_base_url_is_configuration_error() {
        let config = WttrConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        let result = WttrWeatherAdapter::with_config(&config);
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[test]
    fn map_error_connection_failed() {
        let err = WttrError::ConnectionFailed("timeout".into());
        assert!(matches!(
            WttrWeatherAdapter::map_error(err),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn map_error_request_failed() {
        let err = WttrError::RequestFailed("HTTP 404 Not Found".into());
        assert!(matches!(
            WttrWeatherAdapter::map_error(err),
            ApplicationError::ExternalService(_)
        ));
    }

    #[test]
    fn map_error_parse_failure() {
        let err = WttrError::ParseError("expected value".into());
        assert!(matches!(
            WttrWeatherAdapter::map_error(err),
            ApplicationError::InvalidResponse(_)
        ));
    }

    #[test]
    fn map_error_empty_response() {
        assert!(matches!(
            WttrWeatherAdapter::map_error(WttrError::EmptyResponse),
            ApplicationError::InvalidResponse(_)
        ));
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WttrWeatherAdapter>();
    }
}
