//! Holiday models.
//!
//! This module contains [`HolidayRecord`], the shape handed over by the holiday
//! configuration provider, and [`HolidayRule`], the validated form the pricing
//! engine consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A holiday surcharge rule for a single calendar date.
///
/// # Example
///
/// ```
/// use rental_pricing::models::HolidayRule;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rule = HolidayRule {
///     name: "Reunification Day".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
///     price_multiplier: Decimal::new(15, 1),
///     is_active: true,
/// };
/// assert!(rule.applies_on(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()));
/// assert!(!rule.applies_on(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRule {
    /// The name of the holiday.
    pub name: String,
    /// The calendar date the rule applies to.
    pub date: NaiveDate,
    /// Multiplier applied to the hourly rate on this date (e.g. 1.5).
    pub price_multiplier: Decimal,
    /// Inactive rules are ignored by the engine.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl HolidayRule {
    /// Returns true if this rule is active and names the given date.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        self.is_active && self.date == date
    }
}

/// A holiday as stored by the holiday configuration provider.
///
/// Records may be undated, inactive or soft-deleted; only records that are
/// none of those turn into a [`HolidayRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The name of the holiday.
    pub name: String,
    /// The calendar date, if one has been set.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Multiplier applied to the hourly rate on this date.
    pub price_multiplier: Decimal,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Whether the record is switched on.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Whether the record has been soft-deleted.
    #[serde(default)]
    pub is_deleted: bool,
}

impl HolidayRecord {
    /// Converts the record into a rule, if it is active, not deleted and dated.
    pub fn to_rule(&self) -> Option<HolidayRule> {
        if !self.is_active || self.is_deleted {
            return None;
        }
        self.date.map(|date| HolidayRule {
            name: self.name.clone(),
            date,
            price_multiplier: self.price_multiplier,
            is_active: true,
        })
    }
}

/// Filters provider records down to the rules the engine should see.
///
/// Order is preserved, so "first match wins" lookups keep the provider's order.
pub fn active_holiday_rules(records: &[HolidayRecord]) -> Vec<HolidayRule> {
    records.iter().filter_map(HolidayRecord::to_rule).collect()
}
