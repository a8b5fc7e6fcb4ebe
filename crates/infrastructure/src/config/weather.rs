//! OpenWeatherMap configuration
//!
//! The API key is injected here and flows into the client at construction;
//! nothing reads it from ambient process state later.

use application::ApplicationError;
use integration_openweather::WeatherApiConfig;
use serde::{Deserialize, Serialize};

/// Weather API configuration
///
/// Get an API key at <https://openweathermap.org/api>.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API key (required at startup)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Geocoding API base URL
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,

    /// Weather/forecast API base URL
    #[serde(default = "default_data_base_url")]
    pub data_base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_geo_base_url() -> String {
    "http://api.openweathermap.org/geo/1.0".to_string()
}

fn default_data_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geo_base_url: default_geo_base_url(),
            data_base_url: default_data_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Build the client configuration, requiring an API key
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set.
    pub fn to_client_config(&self) -> Result<WeatherApiConfig, ApplicationError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::Configuration(
                    "No OpenWeatherMap API key configured. \
                     Set weather.api_key in config.toml or RAINCHECK_WEATHER_API_KEY."
                        .to_string(),
                )
            })?;

        Ok(WeatherApiConfig {
            geo_base_url: self.geo_base_url.clone(),
            data_base_url: self.data_base_url.clone(),
            api_key: api_key.to_string(),
            timeout_secs: self.timeout_secs,
        })
    }
}
