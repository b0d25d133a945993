//! Rental window segmentation by calendar day.
//!
//! This module splits a rental window at midnight boundaries so that each
//! calendar day can be checked against the holiday rules on its own.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RentalWindow, hours_between};

/// The portion of a rental window that falls on a single calendar day.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::DaySegment;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let segment = DaySegment {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     start_time: NaiveDateTime::parse_from_str("2025-01-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2025-01-02 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     hours: Decimal::from(14),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// The calendar day of this segment.
    pub date: NaiveDate,
    /// The start time of this segment.
    pub start_time: NaiveDateTime,
    /// The end time of this segment (midnight or the window end).
    pub end_time: NaiveDateTime,
    /// The number of rental hours on this day.
    pub hours: Decimal,
}

/// Segments a rental window by day boundaries.
///
/// Splits the window at each midnight, creating one segment per calendar day
/// the window overlaps. Days with zero overlap are skipped, so a window that
/// ends exactly at midnight does not produce a segment for the following day.
///
/// # Returns
///
/// A vector of [`DaySegment`]s ordered chronologically. The sum of segment
/// hours equals the window's total hours exactly, including for windows
/// measured to the second. An empty or inverted window yields no segments.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::segment_by_day;
/// use rental_pricing::models::RentalWindow;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let window = RentalWindow::new(
///     NaiveDateTime::parse_from_str("2025-01-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-01-03 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
///
/// let segments = segment_by_day(&window);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].hours, Decimal::from(14));
/// assert_eq!(segments[1].hours, Decimal::from(24));
/// assert_eq!(segments[2].hours, Decimal::from(10));
/// ```
pub fn segment_by_day(window: &RentalWindow) -> Vec<DaySegment> {
    let mut segments = Vec::new();
    let mut current_start = window.start;
    // Hours are measured from pickup so that rounded day values add up to the window total
    let mut elapsed = Decimal::ZERO;

    while current_start < window.end {
        // Segment ends at either midnight or window end, whichever is first
        let segment_end = current_start
            .date()
            .succ_opt()
            .map(|next_day| next_day.and_time(NaiveTime::MIN))
            .map_or(window.end, |next_midnight| next_midnight.min(window.end));

        let elapsed_at_end = hours_between(window.start, segment_end);
        let hours = elapsed_at_end - elapsed;
        if hours > Decimal::ZERO {
            segments.push(DaySegment {
                date: current_start.date(),
                start_time: current_start,
                end_time: segment_end,
                hours,
            });
        }

        elapsed = elapsed_at_end;
        current_start = segment_end;
    }

    segments
}
