//! Weather data models
//!
//! Parsed types handed to callers, plus the raw serde shapes of the
//! OpenWeatherMap responses they are built from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One geocoding candidate for a city name
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCandidate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// Parsed current weather for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherData {
    /// Condition group, e.g. "Rain"
    pub condition: String,
    /// Condition detail, e.g. "light rain"
    pub description: String,
    /// Relative humidity percentage
    pub humidity: u8,
    /// ISO 3166 country code
    pub country: String,
}

/// One parsed 3-hourly forecast entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast slot timestamp (UTC)
    pub timestamp: NaiveDateTime,
    /// Condition groups reported for the slot
    pub conditions: Vec<String>,
}

/// Raw condition object shared by the current and forecast payloads
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionData {
    pub main: String,
    #[serde(default)]
    pub description: String,
}

/// Raw `main` block of the current weather payload
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    pub humidity: u8,
}

/// Raw `sys` block of the current weather payload
#[derive(Debug, Clone, Deserialize)]
pub struct SysData {
    pub country: String,
}

/// Raw current weather response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub weather: Vec<ConditionData>,
    pub main: MainData,
    pub sys: SysData,
}

/// Raw forecast list item
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    /// Slot timestamp in "YYYY-MM-DD HH:MM:SS" (UTC)
    pub dt_txt: String,
    pub weather: Vec<ConditionData>,
}

/// Raw 5-day/3-hour forecast response
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
}
