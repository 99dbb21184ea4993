//! Raw wttr.in response models
//!
//! The provider's key casing is inconsistent (`temp_C`, `windspeedKmph`,
//! `weatherDesc`, sometimes capitalized wholesale), so decoding goes through
//! a tolerant mapping layer: the body is parsed into a [`serde_json::Value`],
//! every object key is lowercased recursively, and only then bound to these
//! lowercase-named structs.

use serde::Deserialize;
use serde_json::Value;

use crate::client::WttrError;

/// Raw provider payload for a `?format=j1` request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WttrResponse {
    /// Ordered current-condition records; the first entry is authoritative
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,

    /// Ordered nearest-area records, possibly absent
    #[serde(default)]
    pub nearest_area: Vec<NearestArea>,
}

/// One current-condition record; numeric fields arrive as strings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentCondition {
    #[serde(default)]
    pub temp_c: String,

    #[serde(default)]
    pub humidity: String,

    #[serde(default)]
    pub windspeedkmph: String,

    #[serde(default)]
    pub weatherdesc: Vec<Labelled>,
}

/// One nearest-area record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearestArea {
    #[serde(default)]
    pub areaname: Vec<Labelled>,
}

/// wttr.in wraps leaf strings as `{"value": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Labelled {
    #[serde(default)]
    pub value: String,
}

/// Decode a provider body through the tolerant mapping layer
pub(crate) fn decode(body: &str) -> Result<WttrResponse, WttrError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| WttrError::ParseError(e.to_string()))?;
    serde_json::from_value(lowercase_keys(value))
        .map_err(|e| WttrError::ParseError(e.to_string()))
}

/// Recursively lowercase every object key
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (key.to_ascii_lowercase(), lowercase_keys(inner)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}
