//! Weather service port
//!
//! Defines the interface for geocoding and weather data retrieval.

use async_trait::async_trait;
use domain::{ForecastSlot, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather conditions for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Condition group, e.g. "Rain" or "Clear"
    pub condition: String,
    /// Condition detail, e.g. "light rain"
    pub description: String,
    /// Relative humidity in percent (0-100 from a well-behaved upstream)
    pub humidity: u8,
    /// ISO country code of the observed location
    pub country: String,
}

/// Port for geocoding and weather lookups
///
/// One request's calls are strictly sequential: the resolved coordinates
/// from `geocode` feed `current_conditions` and `hourly_forecast`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Resolve a city name to candidate coordinates
    ///
    /// An empty vector means the provider knows no such place. That is a
    /// defined not-found state, not an error.
    async fn geocode(&self, city: &str) -> Result<Vec<GeoLocation>, ApplicationError>;

    /// Get current weather for a location
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Get the 5-day/3-hour forecast for a location
    async fn hourly_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<ForecastSlot>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }

    #[test]
    fn current_conditions_serialization() {
        let conditions = CurrentConditions {
            condition: "Clouds".to_string(),
            description: "broken clouds".to_string(),
            humidity: 81,
            country: "GB".to_string(),
        };

        let json = serde_json::to_string(&conditions).expect("serialize");
        let parsed: CurrentConditions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.condition, "Clouds");
        assert_eq!(parsed.humidity, 81);
    }
}
