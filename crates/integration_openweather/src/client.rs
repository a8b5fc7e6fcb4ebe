//! OpenWeatherMap HTTP client
//!
//! One client for the three endpoints a lookup needs: geocoding, current
//! weather, and the 5-day/3-hour forecast.

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    CurrentResponse, CurrentWeatherData, ForecastEntry, ForecastItem, ForecastResponse,
    GeoCandidate,
};

/// Wire format of the forecast `dt_txt` field
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Weather client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Weather API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// Geocoding API base URL (default: <http://api.openweathermap.org/geo/1.0>)
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,

    /// Weather/forecast API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_data_base_url")]
    pub data_base_url: String,

    /// OpenWeatherMap API key
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
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

impl WeatherApiConfig {
    /// Create a configuration with default URLs and timeout for a key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            geo_base_url: default_geo_base_url(),
            data_base_url: default_data_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
        }
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherApiConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Resolve a city name to candidate coordinates
    ///
    /// An empty vector means the geocoder knows no such place.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn geocode(&self, city: &str) -> Result<Vec<GeoCandidate>, OpenWeatherError> {
        let url = format!("{}/direct", self.config.geo_base_url);
        debug!(url = %url, "Resolving city name");

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        read_json(response).await
    }

    /// Get current weather for coordinates
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeatherData, OpenWeatherError> {
        let url = format!("{}/weather", self.config.data_base_url);
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let raw: CurrentResponse = read_json(response).await?;
        Self::parse_current_weather(&raw)
    }

    /// Get the 5-day/3-hour forecast for coordinates
    ///
    /// Entries come back in the provider's chronological order.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastEntry>, OpenWeatherError> {
        let url = format!("{}/forecast", self.config.data_base_url);
        debug!(url = %url, "Fetching 3-hourly forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.config.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let raw: ForecastResponse = read_json(response).await?;
        raw.list.iter().map(Self::parse_forecast_entry).collect()
    }

    /// Parse current weather from the raw response
    ///
    /// A 200 body without a condition entry is a parse error, not a
    /// not-found state.
    fn parse_current_weather(raw: &CurrentResponse) -> Result<CurrentWeatherData, OpenWeatherError> {
        let condition = raw.weather.first().ok_or_else(|| {
            OpenWeatherError::ParseError("No condition entry in current weather response".to_string())
        })?;

        Ok(CurrentWeatherData {
            condition: condition.main.clone(),
            description: condition.description.clone(),
            humidity: raw.main.humidity,
            country: raw.sys.country.clone(),
        })
    }

    /// Parse one forecast list item
    fn parse_forecast_entry(item: &ForecastItem) -> Result<ForecastEntry, OpenWeatherError> {
        let timestamp = NaiveDateTime::parse_from_str(&item.dt_txt, DT_TXT_FORMAT)
            .map_err(|e| OpenWeatherError::ParseError(format!("Invalid dt_txt: {e}")))?;

        Ok(ForecastEntry {
            timestamp,
            conditions: item.weather.iter().map(|w| w.main.clone()).collect(),
        })
    }
}

/// Triage the response status, then deserialize the body
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, OpenWeatherError> {
    let status = response.status();
    if status.is_server_error() {
        return Err(OpenWeatherError::ServiceUnavailable(format!("HTTP {status}")));
    }
    if !status.is_success() {
        return Err(OpenWeatherError::RequestFailed(format!("HTTP {status}")));
    }

    response
        .json()
        .await
        .map_err(|e| OpenWeatherError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::models::{ConditionData, MainData, SysData};

    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WeatherApiConfig::with_api_key("KEY");
        assert_eq!(config.geo_base_url, "http://api.openweathermap.org/geo/1.0");
        assert_eq!(
            config.data_base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.api_key, "KEY");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let config: WeatherApiConfig =
            serde_json::from_str(r#"{"api_key": "KEY"}"#).expect("deserialize");
        assert_eq!(config.api_key, "KEY");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.geo_base_url.contains("openweathermap.org"));
    }

    #[test]
    fn test_client_creation() {
        let client = OpenWeatherClient::new(WeatherApiConfig::with_api_key("KEY"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_current_weather() {
        let raw = CurrentResponse {
            weather: vec![ConditionData {
                main: "Clouds".to_string(),
                description: "broken clouds".to_string(),
            }],
            main: MainData { humidity: 81 },
            sys: SysData {
                country: "GB".to_string(),
            },
        };

        let parsed = OpenWeatherClient::parse_current_weather(&raw).expect("should parse");
        assert_eq!(parsed.condition, "Clouds");
        assert_eq!(parsed.description, "broken clouds");
        assert_eq!(parsed.humidity, 81);
        assert_eq!(parsed.country, "GB");
    }

    #[test]
    fn test_parse_current_weather_without_condition_entry() {
        let raw = CurrentResponse {
            weather: Vec::new(),
            main: MainData { humidity: 50 },
            sys: SysData {
                country: "GB".to_string(),
            },
        };

        let err = OpenWeatherClient::parse_current_weather(&raw).unwrap_err();
        assert!(matches!(err, OpenWeatherError::ParseError(_)));
    }

    #[test]
    fn test_parse_forecast_entry() {
        let item = ForecastItem {
            dt_txt: "2024-06-02 15:00:00".to_string(),
            weather: vec![
                ConditionData {
                    main: "Rain".to_string(),
                    description: String::new(),
                },
                ConditionData {
                    main: "Clouds".to_string(),
                    description: String::new(),
                },
            ],
        };

        let entry = OpenWeatherClient::parse_forecast_entry(&item).expect("should parse");
        assert_eq!(
            entry.timestamp.format(DT_TXT_FORMAT).to_string(),
            "2024-06-02 15:00:00"
        );
        assert_eq!(entry.conditions, vec!["Rain", "Clouds"]);
    }

    #[test]
    fn test_parse_forecast_entry_invalid_timestamp() {
        let item = ForecastItem {
            dt_txt: "not a timestamp".to_string(),
            weather: Vec::new(),
        };

        let err = OpenWeatherClient::parse_forecast_entry(&item).unwrap_err();
        assert!(matches!(err, OpenWeatherError::ParseError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = OpenWeatherError::RequestFailed("HTTP 404 Not Found".to_string());
        assert!(err.to_string().contains("HTTP 404"));

        let err = OpenWeatherError::ServiceUnavailable("HTTP 503".to_string());
        assert!(err.to_string().contains("unavailable"));
    }
}
