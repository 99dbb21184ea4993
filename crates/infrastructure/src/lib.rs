//! Infrastructure layer
//!
//! Configuration loading and concrete adapters behind the application ports.

pub mod adapters;
pub mod config;

pub use adapters::WttrWeatherAdapter;
pub use config::{AppConfig, ServerConfig};
