//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `weather`: OpenWeatherMap API settings

mod server;
mod weather;

use serde::{Deserialize, Serialize};

pub use server::ServerConfig;
pub use weather::WeatherAppConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and
    /// `RAINCHECK_*` environment variables (e.g. `RAINCHECK_SERVER_PORT`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value fails to
    /// deserialize into the expected type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., RAINCHECK_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("RAINCHECK")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_server_settings() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn default_config_has_no_api_key() {
        let config = AppConfig::default();
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [weather]
            api_key = "KEY"
            timeout_secs = 10
        "#;

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.weather.api_key.as_deref(), Some("KEY"));
        assert_eq!(config.weather.timeout_secs, 10);
    }
}
