//! wttr.in weather integration
//!
//! Client for wttr.in-style JSON weather providers (`?format=j1`). Issues one
//! outbound GET per query and normalizes the provider's loosely-typed payload
//! into the canonical [`domain::WeatherReport`].

pub mod client;
mod models;
pub mod normalize;

pub use client::{WttrClient, WttrConfig, WttrError};
pub use models::{CurrentCondition, Labelled, NearestArea, WttrResponse};
pub use normalize::normalize;
