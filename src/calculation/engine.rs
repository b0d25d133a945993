//! The rental pricing engine.
//!
//! [`PricingEngine::compute`] runs the three pricing stages in order:
//!
//! 1. Duration tiering: split hours into discounted blocks and regular remainder
//! 2. Day-by-day pricing with holiday surcharges
//! 3. Membership discount on the combined subtotal

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HolidayRule, PricingResult, RentalWindow};

use super::{
    apply_membership_discount, calculate_duration_tier, calculate_holiday_surcharge,
    duration_discount_amount, segment_by_day,
};

/// Computes rental fees.
///
/// The engine holds no state; every call works only on its own inputs, so a
/// single instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    /// Creates a new pricing engine.
    pub fn new() -> Self {
        Self
    }

    /// Prices a rental.
    ///
    /// # Arguments
    ///
    /// * `window` - The rental window; must end strictly after it starts
    /// * `daily_rate` - The vehicle's full daily rate; must be positive
    /// * `holidays` - Holiday rules; inactive rules are ignored, first match wins
    /// * `duration_discount_rate` - Multiplier in `(0, 1]` for hours in completed blocks
    /// * `membership_discount_percent` - Percentage in `[0, 100]` taken off the subtotal
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRange`] if `window.end <= window.start`
    /// - [`EngineError::InvalidRate`] if `daily_rate <= 0`
    /// - [`EngineError::AmountOverflow`] if an amount exceeds the `Decimal` range
    ///
    /// # Example
    ///
    /// ```
    /// use rental_pricing::calculation::PricingEngine;
    /// use rental_pricing::models::{DurationTier, RentalWindow};
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let window = RentalWindow::new(
    ///     NaiveDateTime::parse_from_str("2025-01-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     NaiveDateTime::parse_from_str("2025-01-03 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    /// );
    ///
    /// let result = PricingEngine::new()
    ///     .compute(&window, Decimal::from(100_000), &[], Decimal::ONE, Decimal::ZERO)
    ///     .unwrap();
    ///
    /// assert_eq!(result.total_rental_fee, Decimal::from(200_000));
    /// assert_eq!(result.tier_breakdown.tier, DurationTier::None);
    /// ```
    pub fn compute(
        &self,
        window: &RentalWindow,
        daily_rate: Decimal,
        holidays: &[HolidayRule],
        duration_discount_rate: Decimal,
        membership_discount_percent: Decimal,
    ) -> EngineResult<PricingResult> {
        if !window.is_valid() {
            return Err(EngineError::InvalidRange {
                start: window.start,
                end: window.end,
            });
        }
        if daily_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate { rate: daily_rate });
        }

        let mut audit_steps = Vec::with_capacity(3);

        let tier_result = calculate_duration_tier(window.total_hours(), 1);
        audit_steps.push(tier_result.audit_step);
        let tier_breakdown = tier_result.breakdown;

        let segments = segment_by_day(window);
        let day_result = calculate_holiday_surcharge(
            &segments,
            &tier_breakdown,
            daily_rate,
            duration_discount_rate,
            holidays,
            2,
        )?;
        audit_steps.push(day_result.audit_step);

        let discount_amount =
            duration_discount_amount(&tier_breakdown, daily_rate, duration_discount_rate)?;
        let subtotal = day_result
            .base_rental_fee
            .checked_add(day_result.holiday_surcharge)
            .ok_or_else(|| EngineError::overflow("rental subtotal"))?;

        let membership = apply_membership_discount(subtotal, membership_discount_percent, 3)?;
        audit_steps.push(membership.audit_step);

        debug!(
            tier = %tier_breakdown.tier,
            days = day_result.day_contributions.len(),
            base_rental_fee = %day_result.base_rental_fee,
            holiday_surcharge = %day_result.holiday_surcharge,
            total_rental_fee = %membership.total,
            "Rental priced"
        );

        Ok(PricingResult {
            base_rental_fee: day_result.base_rental_fee,
            discount_amount,
            holiday_surcharge: day_result.holiday_surcharge,
            subtotal,
            membership_discount_percent,
            membership_discount_amount: membership.discount_amount,
            total_rental_fee: membership.total,
            day_contributions: day_result.day_contributions,
            tier_breakdown,
            audit_steps,
        })
    }
}
