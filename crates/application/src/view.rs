//! Renderable weather view-model
//!
//! The flat structure handed to the template layer. Failure states replace
//! every field through a single constructor, so a view is always uniformly
//! populated, uniformly "N/A", or uniformly "Error" - never a mix.

use domain::GeoLocation;
use serde::Serialize;

use crate::ports::CurrentConditions;

/// Placeholder for a city the geocoder does not know
pub const NOT_FOUND: &str = "N/A";

/// Placeholder substituted after an upstream failure
pub const UPSTREAM_ERROR: &str = "Error";

/// Weather data for one lookup, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherView {
    /// The city name as the user submitted it
    pub location: String,
    pub latitude: String,
    pub longitude: String,
    /// Condition group, e.g. "Rain"
    pub condition: String,
    /// Condition detail, e.g. "light rain"
    pub description: String,
    pub humidity: String,
    pub humidity_message: String,
    pub country: String,
    /// Formatted times of tomorrow's rainy forecast slots, chronological
    pub rain_times: Vec<String>,
}

impl WeatherView {
    /// Build the populated view for a successful lookup
    #[must_use]
    pub fn populated(
        city: &str,
        location: GeoLocation,
        conditions: &CurrentConditions,
        rain_times: Vec<String>,
    ) -> Self {
        Self {
            location: city.to_string(),
            latitude: location.latitude().to_string(),
            longitude: location.longitude().to_string(),
            condition: conditions.condition.clone(),
            description: conditions.description.clone(),
            humidity: conditions.humidity.to_string(),
            humidity_message: domain::humidity_advice(i64::from(conditions.humidity)).to_string(),
            country: conditions.country.clone(),
            rain_times,
        }
    }

    /// Build the view for a city the geocoder returned no candidates for
    #[must_use]
    pub fn not_found(city: &str) -> Self {
        Self::sentinel(city, NOT_FOUND)
    }

    /// Build the view for a failed upstream call
    #[must_use]
    pub fn error(city: &str) -> Self {
        Self::sentinel(city, UPSTREAM_ERROR)
    }

    fn sentinel(city: &str, placeholder: &str) -> Self {
        Self {
            location: city.to_string(),
            latitude: placeholder.to_string(),
            longitude: placeholder.to_string(),
            condition: placeholder.to_string(),
            description: placeholder.to_string(),
            humidity: placeholder.to_string(),
            humidity_message: placeholder.to_string(),
            country: placeholder.to_string(),
            rain_times: Vec::new(),
        }
    }
}
