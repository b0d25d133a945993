//! Pricing result models for the Rental Pricing Engine.
//!
//! This module contains the [`PricingResult`] type and its associated structures
//! that capture all outputs of a rental pricing calculation: the duration tier
//! breakdown, per-day contributions, monetary totals and the audit steps.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length classification of a rental, used to pick a duration discount.
///
/// # Example
///
/// ```
/// use rental_pricing::models::DurationTier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(DurationTier::for_days(Decimal::from(29)), DurationTier::None);
/// assert_eq!(DurationTier::for_days(Decimal::from(30)), DurationTier::Monthly);
/// assert_eq!(DurationTier::for_days(Decimal::from(365)), DurationTier::Yearly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationTier {
    /// Shorter than 30 days: no duration discount.
    None,
    /// 30 to 364 days: discounted in 30-day blocks.
    Monthly,
    /// 365 days or more: discounted in 365-day blocks.
    Yearly,
}

/// Number of days in a monthly discount block.
pub const MONTHLY_BLOCK_DAYS: u32 = 30;

/// Number of days in a yearly discount block.
pub const YEARLY_BLOCK_DAYS: u32 = 365;

impl DurationTier {
    /// Classifies a (possibly fractional) day count. Both boundaries are inclusive.
    pub fn for_days(days: Decimal) -> Self {
        if days >= Decimal::from(YEARLY_BLOCK_DAYS) {
            DurationTier::Yearly
        } else if days >= Decimal::from(MONTHLY_BLOCK_DAYS) {
            DurationTier::Monthly
        } else {
            DurationTier::None
        }
    }

    /// The block length in days, or `None` for the undiscounted tier.
    pub fn block_days(&self) -> Option<u32> {
        match self {
            DurationTier::None => None,
            DurationTier::Monthly => Some(MONTHLY_BLOCK_DAYS),
            DurationTier::Yearly => Some(YEARLY_BLOCK_DAYS),
        }
    }
}

impl std::fmt::Display for DurationTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationTier::None => write!(f, "none"),
            DurationTier::Monthly => write!(f, "monthly"),
            DurationTier::Yearly => write!(f, "yearly"),
        }
    }
}

/// Split of the rental's hours into discounted and regular hours.
///
/// Discounted hours are the whole completed blocks at the start of the rental;
/// the remainder is billed at the regular rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// The duration tier of the rental.
    pub tier: DurationTier,
    /// Total rental hours.
    pub total_hours: Decimal,
    /// Hours covered by completed discount blocks.
    pub discounted_hours: Decimal,
    /// Hours billed at the regular rate.
    pub regular_hours: Decimal,
    /// Number of completed discount blocks.
    pub completed_blocks: u32,
}

/// The priced portion of a rental falling on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayContribution {
    /// The calendar day.
    pub date: NaiveDate,
    /// Hours of the rental on this day (greater than 0, at most 24).
    pub hours: Decimal,
    /// How many of those hours fall inside a completed discount block.
    pub discounted_hours: Decimal,
    /// Whether an active holiday rule matched this day.
    pub is_holiday: bool,
    /// The name of the matching holiday, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// The blended hourly rate applied on this day, holiday multiplier included.
    pub hourly_rate_applied: Decimal,
    /// The rounded cost of this day, holiday surcharge included.
    pub cost: Decimal,
    /// The rounded holiday surcharge for this day (zero on non-holidays).
    pub surcharge: Decimal,
}

/// A single step in the audit trail recording a pricing decision.
///
/// Each step captures the input, output, and reasoning for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of pricing a rental.
///
/// All monetary fields are whole currency units. The result is internally
/// consistent: the day costs sum to `subtotal`, and `total_rental_fee` is
/// `subtotal` less `membership_discount_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Rental fee after duration discounts, before holidays and membership.
    pub base_rental_fee: Decimal,
    /// Amount saved through the duration discount.
    pub discount_amount: Decimal,
    /// Total holiday surcharge across all days.
    pub holiday_surcharge: Decimal,
    /// `base_rental_fee + holiday_surcharge`.
    pub subtotal: Decimal,
    /// The membership discount percentage applied.
    pub membership_discount_percent: Decimal,
    /// Amount taken off the subtotal by the membership discount.
    pub membership_discount_amount: Decimal,
    /// The fee the renter pays.
    pub total_rental_fee: Decimal,
    /// Per-day contributions, sorted by ascending date.
    pub day_contributions: Vec<DayContribution>,
    /// Discounted/regular hour split.
    pub tier_breakdown: TierBreakdown,
    /// Audit trail of the pricing stages.
    pub audit_steps: Vec<AuditStep>,
}

impl PricingResult {
    /// Returns the days on which a holiday surcharge applied.
    pub fn holiday_days(&self) -> impl Iterator<Item = &DayContribution> {
        self.day_contributions.iter().filter(|d| d.is_holiday)
    }
}
