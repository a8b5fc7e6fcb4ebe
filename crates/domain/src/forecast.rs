//! Tomorrow-rain forecast filter
//!
//! Works on the 3-hourly forecast slots the provider returns. The filter
//! keeps slots that fall on the day after the reference date and carry a
//! rain condition, and formats their times for display.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::clock;

/// One 3-hourly forecast slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSlot {
    /// Slot timestamp (UTC)
    pub timestamp: NaiveDateTime,
    /// Condition names reported for the slot, e.g. "Rain", "Clouds"
    pub conditions: Vec<String>,
}

impl ForecastSlot {
    /// Whether any reported condition is rain (case-insensitive)
    #[must_use]
    pub fn is_rainy(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| c.eq_ignore_ascii_case("rain"))
    }
}

/// Collect the formatted times of tomorrow's rainy slots
///
/// Tomorrow is the calendar day after `reference` (UTC). Slot order is
/// preserved; the upstream list is chronological, so the output is too.
/// No matches yields an empty vector, not an error.
#[must_use]
pub fn rain_times_tomorrow(slots: &[ForecastSlot], reference: NaiveDate) -> Vec<String> {
    let Some(target) = reference.checked_add_days(Days::new(1)) else {
        return Vec::new();
    };

    slots
        .iter()
        .filter(|slot| slot.timestamp.date() == target && slot.is_rainy())
        .map(|slot| clock::format_am_pm(slot.timestamp))
        .collect()
}
