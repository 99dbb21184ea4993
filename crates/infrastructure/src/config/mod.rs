//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `weathergate.toml`
//! next to the binary, then `WEATHERGATE_*` environment variables
//! (e.g. `WEATHERGATE_SERVER_PORT=8080`).

mod server;

use integration_wttr::WttrConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WttrConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional file, and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value fails to
    /// deserialize into the expected type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("weathergate").required(false))
            .add_source(
                config::Environment::with_prefix("WEATHERGATE")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
