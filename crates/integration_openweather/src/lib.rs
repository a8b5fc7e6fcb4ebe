//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap Geocoding, Current Weather, and
//! 5-day/3-hour Forecast APIs (<https://openweathermap.org/api>).
//! Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherError, WeatherApiConfig};
pub use models::{CurrentWeatherData, ForecastEntry, GeoCandidate};
