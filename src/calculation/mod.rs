//! Calculation logic for the Rental Pricing Engine.
//!
//! This module contains the pricing stages (progressive duration tiering,
//! day segmentation, day-by-day holiday surcharges, and the membership
//! discount) and the [`PricingEngine`] that runs them in order.

mod day_segmentation;
mod duration_tier;
mod engine;
mod holiday_surcharge;
mod membership_discount;
mod rounding;

pub use day_segmentation::{DaySegment, segment_by_day};
pub use duration_tier::{DurationTierResult, calculate_duration_tier, duration_discount_amount};
pub use engine::PricingEngine;
pub use holiday_surcharge::{HolidaySurchargeResult, calculate_holiday_surcharge, find_holiday};
pub use membership_discount::{MembershipDiscountResult, apply_membership_discount};
pub use rounding::round_currency;
