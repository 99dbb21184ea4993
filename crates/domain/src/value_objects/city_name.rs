//! City name value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A non-empty city name as supplied by the caller
///
/// The original string is preserved verbatim (including casing) so it can
/// serve as the fallback location label when the provider reports no area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName(String);

impl CityName {
    /// Create a new city name with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCityName` if the input is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self(name))
    }

    /// Get the city name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
