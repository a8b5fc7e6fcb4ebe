//! Weather adapter - Implements WeatherPort using integration_openweather

use application::ApplicationError;
use application::ports::{CurrentConditions, WeatherPort};
use async_trait::async_trait;
use domain::{ForecastSlot, GeoLocation};
use integration_openweather::{
    CurrentWeatherData, ForecastEntry, OpenWeatherClient, OpenWeatherError,
};
use tracing::instrument;

use crate::config::WeatherAppConfig;

/// Adapter for geocoding and weather lookups using OpenWeatherMap
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create a new adapter from application configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set, or an internal
    /// error if the HTTP client fails to initialize.
    pub fn new(config: &WeatherAppConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config.to_client_config()?)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration errors to application errors
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::ConnectionFailed(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OpenWeatherError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Convert integration current weather to the port DTO
    fn map_current(data: CurrentWeatherData) -> CurrentConditions {
        CurrentConditions {
            condition: data.condition,
            description: data.description,
            humidity: data.humidity,
            country: data.country,
        }
    }

    /// Convert an integration forecast entry to a domain slot
    fn map_forecast_entry(entry: ForecastEntry) -> ForecastSlot {
        ForecastSlot {
            timestamp: entry.timestamp,
            conditions: entry.conditions,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, city: &str) -> Result<Vec<GeoLocation>, ApplicationError> {
        let candidates = self.client.geocode(city).await.map_err(Self::map_error)?;

        candidates
            .into_iter()
            .map(|candidate| {
                GeoLocation::new(candidate.lat, candidate.lon).map_err(|e| {
                    ApplicationError::ExternalService(format!(
                        "Geocoder returned invalid coordinates: {e}"
                    ))
                })
            })
            .collect()
    }

    #[instrument(skip(self, location), fields(location = %location))]
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError> {
        let data = self
            .client
            .current_weather(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        Ok(Self::map_current(data))
    }

    #[instrument(skip(self, location), fields(location = %location))]
    async fn hourly_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastSlot>, ApplicationError> {
        let entries = self
            .client
            .forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        Ok(entries.into_iter().map(Self::map_forecast_entry).collect())
    }
}
