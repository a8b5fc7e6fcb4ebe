//! 12-hour clock formatting

use chrono::{NaiveDateTime, Timelike};

/// Format a timestamp's UTC time-of-day as "H:MM AM/PM"
///
/// Hour 0 renders as 12 AM, hour 12 as 12 PM; minutes are zero-padded.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use domain::clock::format_am_pm;
///
/// let midnight: NaiveDateTime = "2024-06-02T00:00:00".parse().expect("valid");
/// assert_eq!(format_am_pm(midnight), "12:00 AM");
///
/// let afternoon: NaiveDateTime = "2024-06-02T13:05:00".parse().expect("valid");
/// assert_eq!(format_am_pm(afternoon), "1:05 PM");
/// ```
#[must_use]
pub fn format_am_pm(timestamp: NaiveDateTime) -> String {
    let hour = timestamp.hour();
    let minute = timestamp.minute();
    let period = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {period}")
}
