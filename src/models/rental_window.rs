//! Rental window model.
//!
//! This module defines the [`RentalWindow`] struct describing the pickup and
//! return times of a rental.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The span of time a vehicle is rented for.
///
/// The window may start and end at any hour and can span any number of
/// calendar days. `start < end` is enforced when the window is priced,
/// not on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalWindow {
    /// Pickup time.
    pub start: NaiveDateTime,
    /// Return time.
    pub end: NaiveDateTime,
}

impl RentalWindow {
    /// Creates a new rental window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Returns true if the window ends strictly after it starts.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Calculates the total rental duration in hours, at millisecond precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use rental_pricing::models::RentalWindow;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let window = RentalWindow::new(
    ///     NaiveDateTime::parse_from_str("2025-01-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2025-01-03 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// );
    /// assert_eq!(window.total_hours(), Decimal::new(485, 1)); // 48.5 hours
    /// ```
    pub fn total_hours(&self) -> Decimal {
        hours_between(self.start, self.end)
    }

    /// Calculates the total rental duration in (fractional) days.
    pub fn total_days(&self) -> Decimal {
        self.total_hours() / Decimal::from(24)
    }
}

/// Decimal places kept on hour values.
///
/// A millisecond is about 2.8e-7 hours, so distinct instants always map to
/// distinct hour values at this scale.
pub(crate) const HOUR_SCALE: u32 = 12;

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Calculates the number of hours between two datetimes, at millisecond
/// precision, rounded to [`HOUR_SCALE`] decimal places.
///
/// Negative spans yield negative hours.
pub(crate) fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let millis = (end - start).num_milliseconds();
    (Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)).round_dp(HOUR_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_two_day_window_is_48_hours() {
        let window = RentalWindow::new(
            make_datetime("2025-01-01", "10:00:00"),
            make_datetime("2025-01-03", "10:00:00"),
        );
        assert_eq!(window.total_hours(), Decimal::from(48));
        assert_eq!(window.total_days(), Decimal::from(2));
    }

    #[test]
    fn test_seconds_are_kept() {
        let window = RentalWindow::new(
            make_datetime("2025-01-01", "10:00:00"),
            make_datetime("2025-01-01", "10:00:30"),
        );
        // 30s = 1/120 h
        assert_eq!(window.total_hours(), Decimal::new(8_333_333_333, 12));
        assert!(window.total_hours() > Decimal::ZERO);
    }

    #[test]
    fn test_sub_second_spans_are_kept() {
        let start = make_datetime("2025-01-01", "10:00:00");
        let end = start + chrono::Duration::milliseconds(1_800);
        assert_eq!(hours_between(start, end), Decimal::new(5, 4)); // 0.0005
    }

    #[test]
    fn test_partial_hours_keep_minute_precision() {
        let window = RentalWindow::new(
            make_datetime("2025-01-01", "10:00:00"),
            make_datetime("2025-01-01", "11:15:00"),
        );
        assert_eq!(window.total_hours(), Decimal::new(125, 2)); // 1.25
    }

    #[test]
    fn test_validity() {
        let start = make_datetime("2025-01-01", "10:00:00");
        let end = make_datetime("2025-01-02", "10:00:00");
        assert!(RentalWindow::new(start, end).is_valid());
        assert!(!RentalWindow::new(start, start).is_valid());
        assert!(!RentalWindow::new(end, start).is_valid());
    }

    #[test]
    fn test_window_deserialization() {
        let json = r#"{"start": "2025-01-01T10:00:00", "end": "2025-01-03T10:00:00"}"#;
        let window: RentalWindow = serde_json::from_str(json).unwrap();
        assert_eq!(window.start, make_datetime("2025-01-01", "10:00:00"));
        assert_eq!(window.end, make_datetime("2025-01-03", "10:00:00"));
    }
}
