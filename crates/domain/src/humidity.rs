//! Humidity advice
//!
//! Maps a relative humidity percentage onto one of three fixed advice
//! messages. The mapping is total: values outside 0-100 (including negative
//! readings from a misbehaving upstream) get the invalid sentinel instead of
//! an error.

/// Advice for dry air (humidity below 30%)
pub const DRY_MESSAGE: &str =
    "Low humidity, which can cause dry skin and irritation.";

/// Advice for the comfortable band (30% to 59%)
pub const COMFORTABLE_MESSAGE: &str = "Comfortable humidity levels for most people.";

/// Advice for humid air (60% and above)
pub const HUMID_MESSAGE: &str =
    "High humidity, which can make the air feel warmer and can lead to discomfort.";

/// Sentinel for out-of-range readings
pub const INVALID_MESSAGE: &str = "Invalid humidity level.";

/// Classify a humidity percentage into an advice message
///
/// # Examples
///
/// ```
/// use domain::humidity::{advice, COMFORTABLE_MESSAGE, INVALID_MESSAGE};
///
/// assert_eq!(advice(45), COMFORTABLE_MESSAGE);
/// assert_eq!(advice(101), INVALID_MESSAGE);
/// assert_eq!(advice(-3), INVALID_MESSAGE);
/// ```
#[must_use]
pub const fn advice(percent: i64) -> &'static str {
    match percent {
        0..=29 => DRY_MESSAGE,
        30..=59 => COMFORTABLE_MESSAGE,
        60..=100 => HUMID_MESSAGE,
        _ => INVALID_MESSAGE,
    }
}
