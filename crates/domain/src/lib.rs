//! Domain layer for Weathergate
//!
//! Contains the canonical weather report entity, query value objects, and
//! domain errors. This layer has no I/O dependencies and defines the
//! ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::WeatherReport;
pub use errors::DomainError;
pub use value_objects::{CityName, GeoLocation, WeatherQuery};
