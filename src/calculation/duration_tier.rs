//! Progressive duration tiering.
//!
//! This module decides how many of a rental's hours fall inside completed
//! discount blocks. A rental of 30 days or more is "monthly" and discounted in
//! 30-day blocks; one of 365 days or more is "yearly" and discounted in 365-day
//! blocks. Only whole completed blocks get the discount; the remainder is
//! billed at the regular rate.
//!
//! The discount rate itself is chosen by the caller. This stage only splits hours.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DurationTier, TierBreakdown};

use super::round_currency;

/// The result of duration tiering, including the breakdown and audit step.
#[derive(Debug, Clone)]
pub struct DurationTierResult {
    /// The discounted/regular hour split.
    pub breakdown: TierBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits total rental hours into discounted and regular hours.
///
/// # Arguments
///
/// * `total_hours` - The total rental duration in hours
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use rental_pricing::calculation::calculate_duration_tier;
/// use rental_pricing::models::DurationTier;
/// use rust_decimal::Decimal;
///
/// // 31 days: one completed monthly block plus one regular day
/// let result = calculate_duration_tier(Decimal::from(31 * 24), 1);
/// assert_eq!(result.breakdown.tier, DurationTier::Monthly);
/// assert_eq!(result.breakdown.discounted_hours, Decimal::from(720));
/// assert_eq!(result.breakdown.regular_hours, Decimal::from(24));
/// ```
pub fn calculate_duration_tier(total_hours: Decimal, step_number: u32) -> DurationTierResult {
    let hours_per_day = Decimal::from(24);
    let total_days = total_hours / hours_per_day;
    let tier = DurationTier::for_days(total_days);

    let (completed_blocks, discounted_hours) = match tier.block_days() {
        Some(block_days) => {
            let block_hours = Decimal::from(block_days) * hours_per_day;
            let blocks = (total_hours / block_hours).floor();
            (blocks.to_u32().unwrap_or(0), blocks * block_hours)
        }
        None => (0, Decimal::ZERO),
    };
    let regular_hours = total_hours - discounted_hours;

    debug!(
        tier = %tier,
        total_hours = %total_hours,
        discounted_hours = %discounted_hours,
        "Duration tier resolved"
    );

    let breakdown = TierBreakdown {
        tier,
        total_hours,
        discounted_hours,
        regular_hours,
        completed_blocks,
    };

    let reasoning = match tier.block_days() {
        Some(block_days) => format!(
            "{} days qualifies for the {} tier: {} completed {}-day block(s) = {} discounted hours, {} regular hours",
            total_days.round_dp(2).normalize(),
            tier,
            completed_blocks,
            block_days,
            discounted_hours.normalize(),
            regular_hours.normalize()
        ),
        None => format!(
            "{} days is below the 30-day threshold: all {} hours billed at the regular rate",
            total_days.round_dp(2).normalize(),
            total_hours.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "duration_tier".to_string(),
        rule_name: "Progressive Duration Tier".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string(),
            "total_days": total_days.round_dp(4).normalize().to_string(),
        }),
        output: serde_json::json!({
            "tier": tier.to_string(),
            "completed_blocks": completed_blocks,
            "discounted_hours": discounted_hours.normalize().to_string(),
            "regular_hours": regular_hours.normalize().to_string(),
        }),
        reasoning,
    };

    DurationTierResult {
        breakdown,
        audit_step,
    }
}

/// Calculates the amount saved by the duration discount.
///
/// This is the difference between the full and discounted hourly rates over
/// every discounted hour, rounded to a whole currency unit.
///
/// Fails with [`EngineError::AmountOverflow`] if the saving exceeds the
/// `Decimal` range.
pub fn duration_discount_amount(
    breakdown: &TierBreakdown,
    daily_rate: Decimal,
    duration_discount_rate: Decimal,
) -> EngineResult<Decimal> {
    let full_hourly = daily_rate / Decimal::from(24);
    full_hourly
        .checked_mul(duration_discount_rate)
        .and_then(|discounted_hourly| full_hourly.checked_sub(discounted_hourly))
        .and_then(|saving| saving.checked_mul(breakdown.discounted_hours))
        .map(round_currency)
        .ok_or_else(|| EngineError::overflow("duration discount amount"))
}
