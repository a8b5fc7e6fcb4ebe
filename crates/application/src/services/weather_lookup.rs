//! Weather lookup orchestration
//!
//! Sequences the upstream calls for one request: geocode the city, fetch
//! current conditions for the first candidate, and optionally fetch the
//! 3-hourly forecast for tomorrow's rain schedule. All failure handling
//! happens at this boundary: the public operations always return a
//! renderable [`WeatherView`], never an error.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use domain::rain_times_tomorrow;
use tracing::{debug, warn};

use crate::{ApplicationError, WeatherView, ports::WeatherPort};

/// Orchestrates geocoding and weather lookups into renderable views
#[derive(Clone)]
pub struct WeatherLookupService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherLookupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherLookupService").finish_non_exhaustive()
    }
}

impl WeatherLookupService {
    /// Create a new lookup service over a weather port
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Look up today's weather for a city
    pub async fn lookup_today(&self, city: &str) -> WeatherView {
        self.lookup(city, false).await
    }

    /// Look up tomorrow's weather and rain schedule for a city
    ///
    /// Tomorrow is relative to the server clock in UTC.
    pub async fn lookup_tomorrow(&self, city: &str) -> WeatherView {
        self.lookup(city, true).await
    }

    async fn lookup(&self, city: &str, with_forecast: bool) -> WeatherView {
        match self.try_lookup(city, with_forecast).await {
            Ok(view) => view,
            Err(err) => {
                // A failure anywhere in the chain discards partial results;
                // the view must never mix real data with sentinels.
                warn!(city = %city, error = %err, "Weather lookup failed");
                WeatherView::error(city)
            },
        }
    }

    async fn try_lookup(
        &self,
        city: &str,
        with_forecast: bool,
    ) -> Result<WeatherView, ApplicationError> {
        let candidates = self.weather.geocode(city).await?;
        let Some(location) = candidates.first().copied() else {
            debug!(city = %city, "Geocoder returned no candidates");
            return Ok(WeatherView::not_found(city));
        };

        let conditions = self.weather.current_conditions(&location).await?;

        let rain_times = if with_forecast {
            let slots = self.weather.hourly_forecast(&location).await?;
            rain_times_tomorrow(&slots, today_utc())
        } else {
            Vec::new()
        };

        Ok(WeatherView::populated(city, location, &conditions, rain_times))
    }
}

fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
