//! Core data models for the Rental Pricing Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod holiday;
mod pricing_result;
mod rental_window;
mod vehicle;

pub use holiday::{HolidayRecord, HolidayRule, active_holiday_rules};
pub use pricing_result::{
    AuditStep, DayContribution, DurationTier, MONTHLY_BLOCK_DAYS, PricingResult, TierBreakdown,
    YEARLY_BLOCK_DAYS,
};
pub use rental_window::RentalWindow;
pub(crate) use rental_window::hours_between;
pub use vehicle::VehicleCategory;
