//! Request types for the Rental Pricing Engine API.
//!
//! This module defines the JSON request structures for the `/quote` endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{HolidayRecord, RentalWindow, VehicleCategory};

/// Request body for the `/quote` endpoint.
///
/// Contains the vehicle, its daily rate and the rental window. Holidays are
/// taken from the configuration unless the request carries its own list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The pricing category of the vehicle.
    pub vehicle_category: VehicleCategory,
    /// The vehicle's full daily rate.
    pub daily_rate: Decimal,
    /// Pickup time.
    pub start: NaiveDateTime,
    /// Return time.
    pub end: NaiveDateTime,
    /// The renter's membership tier code, if any.
    #[serde(default)]
    pub membership_tier: Option<String>,
    /// Holiday records replacing the configured ones.
    #[serde(default)]
    pub holidays: Option<Vec<HolidayRecordRequest>>,
}

impl QuoteRequest {
    /// Returns the rental window of this request.
    pub fn window(&self) -> RentalWindow {
        RentalWindow::new(self.start, self.end)
    }
}

/// Holiday record information in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRecordRequest {
    /// The name of the holiday.
    pub name: String,
    /// The calendar date, if set.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Multiplier applied to the hourly rate on this date.
    pub price_multiplier: Decimal,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the record is switched on.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Whether the record has been soft-deleted.
    #[serde(default)]
    pub is_deleted: bool,
}

fn default_active() -> bool {
    true
}

impl From<HolidayRecordRequest> for HolidayRecord {
    fn from(req: HolidayRecordRequest) -> Self {
        HolidayRecord {
            name: req.name,
            date: req.date,
            price_multiplier: req.price_multiplier,
            description: req.description,
            is_active: req.is_active,
            is_deleted: req.is_deleted,
        }
    }
}
