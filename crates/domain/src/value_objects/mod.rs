//! Value objects for the domain layer

mod city_name;
mod geo_location;
mod weather_query;

pub use city_name::CityName;
pub use geo_location::GeoLocation;
pub use weather_query::WeatherQuery;
