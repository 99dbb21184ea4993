//! Application layer - Use cases and orchestration
//!
//! Contains the weather query service and the port definition it depends on.
//! Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::WeatherProviderPort;
pub use services::WeatherQueryService;
