//! Domain layer for Raincheck
//!
//! Contains the pure weather-lookup logic: value objects, humidity advice,
//! 12-hour clock formatting, and the tomorrow-rain forecast filter.
//! This layer performs no I/O and has no knowledge of the weather provider.

pub mod clock;
pub mod forecast;
pub mod humidity;
pub mod value_objects;

pub use forecast::{ForecastSlot, rain_times_tomorrow};
pub use humidity::advice as humidity_advice;
pub use value_objects::{GeoLocation, InvalidCoordinates};
