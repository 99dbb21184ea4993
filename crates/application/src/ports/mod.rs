//! Port definitions - Interfaces to the outside world

mod weather_provider;

pub use weather_provider::WeatherProviderPort;

#[cfg(test)]
pub use weather_provider::MockWeatherProviderPort;
