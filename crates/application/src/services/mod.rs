//! Application services - Use case implementations

mod weather_lookup;

pub use weather_lookup::WeatherLookupService;
