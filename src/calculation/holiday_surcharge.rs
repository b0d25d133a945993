//! Day-by-day pricing with holiday surcharges.
//!
//! This module prices each calendar day of a rental. Discounted hours from the
//! duration tier are consumed chronologically, starting at pickup. On a day
//! matching an active holiday rule the day's rates are multiplied by the
//! rule's price multiplier, and the extra amount is recorded as the surcharge.
//!
//! ## Rounding
//!
//! Each day's base cost and surcharge are rounded to a whole currency unit
//! before they are summed. Totals can therefore differ by a unit or two from
//! rounding the exact grand total once.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DayContribution, HolidayRule, TierBreakdown};

use super::{DaySegment, round_currency};

/// The result of day-by-day pricing.
#[derive(Debug, Clone)]
pub struct HolidaySurchargeResult {
    /// One contribution per segment, in chronological order.
    pub day_contributions: Vec<DayContribution>,
    /// Sum of the rounded per-day base costs (duration discount applied, no holidays).
    pub base_rental_fee: Decimal,
    /// Sum of the rounded per-day holiday surcharges.
    pub holiday_surcharge: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Finds the holiday rule for a date.
///
/// Only active rules match. If several active rules name the same date the
/// first one in `holidays` wins; multipliers are never combined.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::find_holiday;
/// use rental_pricing::models::HolidayRule;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 9, 2).unwrap();
/// let holidays = vec![HolidayRule {
///     name: "National Day".to_string(),
///     date,
///     price_multiplier: Decimal::new(15, 1),
///     is_active: true,
/// }];
///
/// assert_eq!(find_holiday(date, &holidays).unwrap().name, "National Day");
/// assert!(find_holiday(date.succ_opt().unwrap(), &holidays).is_none());
/// ```
pub fn find_holiday(date: NaiveDate, holidays: &[HolidayRule]) -> Option<&HolidayRule> {
    holidays.iter().find(|h| h.applies_on(date))
}

/// Prices each day segment and computes the holiday surcharge.
///
/// # Arguments
///
/// * `segments` - The rental window split by calendar day, in order
/// * `breakdown` - The duration tier breakdown (how many hours are discounted)
/// * `daily_rate` - The full daily rate of the vehicle
/// * `duration_discount_rate` - Multiplier for discounted hours (1 means no discount)
/// * `holidays` - Holiday rules to check each day against
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// [`EngineError::AmountOverflow`] if a day cost or running total exceeds the
/// `Decimal` range.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::{calculate_duration_tier, calculate_holiday_surcharge, segment_by_day};
/// use rental_pricing::models::{HolidayRule, RentalWindow};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let window = RentalWindow::new(
///     NaiveDateTime::parse_from_str("2025-01-01 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2025-01-03 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// );
/// let holidays = vec![HolidayRule {
///     name: "Holiday".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
///     price_multiplier: Decimal::new(15, 1),
///     is_active: true,
/// }];
///
/// let tier = calculate_duration_tier(window.total_hours(), 1);
/// let result = calculate_holiday_surcharge(
///     &segment_by_day(&window),
///     &tier.breakdown,
///     Decimal::from(100_000),
///     Decimal::ONE,
///     &holidays,
///     2,
/// )
/// .unwrap();
///
/// assert_eq!(result.base_rental_fee, Decimal::from(200_000));
/// assert_eq!(result.holiday_surcharge, Decimal::from(50_000));
/// ```
pub fn calculate_holiday_surcharge(
    segments: &[DaySegment],
    breakdown: &TierBreakdown,
    daily_rate: Decimal,
    duration_discount_rate: Decimal,
    holidays: &[HolidayRule],
    step_number: u32,
) -> EngineResult<HolidaySurchargeResult> {
    let full_hourly = daily_rate / Decimal::from(24);
    let discounted_hourly = full_hourly
        .checked_mul(duration_discount_rate)
        .ok_or_else(|| EngineError::overflow("discounted hourly rate"))?;

    let mut remaining_discounted = breakdown.discounted_hours;
    let mut day_contributions = Vec::with_capacity(segments.len());
    let mut base_rental_fee = Decimal::ZERO;
    let mut holiday_surcharge = Decimal::ZERO;

    for segment in segments {
        let discounted_hours = segment.hours.min(remaining_discounted);
        remaining_discounted -= discounted_hours;
        let regular_hours = segment.hours - discounted_hours;

        let base_cost_exact = discounted_hours
            .checked_mul(discounted_hourly)
            .zip(regular_hours.checked_mul(full_hourly))
            .and_then(|(discounted, regular)| discounted.checked_add(regular))
            .ok_or_else(|| EngineError::overflow("day base cost"))?;

        let holiday = find_holiday(segment.date, holidays);
        let cost_exact = match holiday {
            Some(rule) => base_cost_exact
                .checked_mul(rule.price_multiplier)
                .ok_or_else(|| EngineError::overflow("holiday day cost"))?,
            None => base_cost_exact,
        };

        let base_cost = round_currency(base_cost_exact);
        let surcharge = round_currency(cost_exact - base_cost_exact);

        if let Some(rule) = holiday {
            debug!(
                date = %segment.date,
                holiday = %rule.name,
                multiplier = %rule.price_multiplier,
                surcharge = %surcharge,
                "Holiday surcharge applied"
            );
        }

        base_rental_fee = base_rental_fee
            .checked_add(base_cost)
            .ok_or_else(|| EngineError::overflow("base rental fee"))?;
        holiday_surcharge = holiday_surcharge
            .checked_add(surcharge)
            .ok_or_else(|| EngineError::overflow("holiday surcharge"))?;
        let hourly_rate_applied = cost_exact
            .checked_div(segment.hours)
            .ok_or_else(|| EngineError::overflow("hourly rate applied"))?;

        day_contributions.push(DayContribution {
            date: segment.date,
            hours: segment.hours,
            discounted_hours,
            is_holiday: holiday.is_some(),
            holiday_name: holiday.map(|rule| rule.name.clone()),
            hourly_rate_applied: hourly_rate_applied.round_dp(2),
            cost: base_cost + surcharge,
            surcharge,
        });
    }

    let holiday_dates: Vec<String> = day_contributions
        .iter()
        .filter(|d| d.is_holiday)
        .map(|d| d.date.to_string())
        .collect();

    let reasoning = if holiday_dates.is_empty() {
        format!(
            "{} day(s) priced, no holidays: base fee {}",
            day_contributions.len(),
            base_rental_fee
        )
    } else {
        format!(
            "{} day(s) priced, holidays on {}: base fee {} + surcharge {}",
            day_contributions.len(),
            holiday_dates.join(", "),
            base_rental_fee,
            holiday_surcharge
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "holiday_surcharge".to_string(),
        rule_name: "Day-by-Day Holiday Surcharge".to_string(),
        input: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string(),
            "duration_discount_rate": duration_discount_rate.normalize().to_string(),
            "days": segments.len(),
            "holiday_rules": holidays.len(),
        }),
        output: serde_json::json!({
            "base_rental_fee": base_rental_fee.to_string(),
            "holiday_surcharge": holiday_surcharge.to_string(),
            "holiday_dates": holiday_dates,
        }),
        reasoning,
    };

    Ok(HolidaySurchargeResult {
        day_contributions,
        base_rental_fee,
        holiday_surcharge,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{calculate_duration_tier, segment_by_day};
    use crate::models::RentalWindow;
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn holiday(name: &str, date: &str, multiplier: &str) -> HolidayRule {
        HolidayRule {
            name: name.to_string(),
            date: make_date(date),
            price_multiplier: dec(multiplier),
            is_active: true,
        }
    }

    fn price(
        start: (&str, &str),
        end: (&str, &str),
        daily_rate: &str,
        rate: &str,
        holidays: &[HolidayRule],
    ) -> HolidaySurchargeResult {
        let window = RentalWindow::new(make_datetime(start.0, start.1), make_datetime(end.0, end.1));
        let tier = calculate_duration_tier(window.total_hours(), 1);
        calculate_holiday_surcharge(
            &segment_by_day(&window),
            &tier.breakdown,
            dec(daily_rate),
            dec(rate),
            holidays,
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_no_holidays_no_surcharge() {
        let result = price(
            ("2025-01-01", "10:00:00"),
            ("2025-01-03", "10:00:00"),
            "100000",
            "1",
            &[],
        );
        assert_eq!(result.base_rental_fee, dec("200000"));
        assert_eq!(result.holiday_surcharge, Decimal::ZERO);
        assert!(result.day_contributions.iter().all(|d| !d.is_holiday));
        assert!(result.day_contributions.iter().all(|d| d.holiday_name.is_none()));
    }

    #[test]
    fn test_partial_days_round_individually() {
        let result = price(
            ("2025-01-01", "10:00:00"),
            ("2025-01-03", "10:00:00"),
            "100000",
            "1",
            &[],
        );
        let costs: Vec<Decimal> = result.day_contributions.iter().map(|d| d.cost).collect();
        // 14h, 24h, 10h at 4166.67/h
        assert_eq!(costs, vec![dec("58333"), dec("100000"), dec("41667")]);
    }

    #[test]
    fn test_full_holiday_day_surcharge() {
        let holidays = vec![holiday("Holiday", "2025-01-02", "1.5")];
        let result = price(
            ("2025-01-01", "10:00:00"),
            ("2025-01-03", "10:00:00"),
            "100000",
            "1",
            &holidays,
        );
        assert_eq!(result.holiday_surcharge, dec("50000"));

        let day = &result.day_contributions[1];
        assert!(day.is_holiday);
        assert_eq!(day.holiday_name.as_deref(), Some("Holiday"));
        assert_eq!(day.surcharge, dec("50000"));
        assert_eq!(day.cost, dec("150000"));
        assert_eq!(day.hourly_rate_applied, dec("6250"));
    }

    #[test]
    fn test_partial_holiday_day_surcharge_scales_with_hours() {
        // Pickup on the holiday at 18:00: 6 holiday hours
        let holidays = vec![holiday("Holiday", "2025-01-01", "2")];
        let result = price(
            ("2025-01-01", "18:00:00"),
            ("2025-01-02", "18:00:00"),
            "96000",
            "1",
            &holidays,
        );
        // 6h * 4000 * (2 - 1)
        assert_eq!(result.holiday_surcharge, dec("24000"));
        assert_eq!(result.base_rental_fee, dec("96000"));
    }

    #[test]
    fn test_holiday_outside_window_ignored() {
        let holidays = vec![holiday("Later", "2025-02-01", "3")];
        let result = price(
            ("2025-01-01", "10:00:00"),
            ("2025-01-03", "10:00:00"),
            "100000",
            "1",
            &holidays,
        );
        assert_eq!(result.holiday_surcharge, Decimal::ZERO);
    }

    #[test]
    fn test_holiday_surcharge_uses_discounted_rate() {
        // 31 days from Jan 1, holiday on Jan 10 (inside the discounted block)
        let holidays = vec![holiday("Holiday", "2025-01-10", "1.5")];
        let result = price(
            ("2025-01-01", "00:00:00"),
            ("2025-02-01", "00:00:00"),
            "100000",
            "0.95",
            &holidays,
        );
        // 95,000 * 0.5
        assert_eq!(result.holiday_surcharge, dec("47500"));
    }

    #[test]
    fn test_discounted_hours_consumed_chronologically() {
        // 31 days starting 10:00: the block ends on day 31 at 10:00
        let result = price(
            ("2025-01-01", "10:00:00"),
            ("2025-02-01", "10:00:00"),
            "96000",
            "0.5",
            &[],
        );
        let days = &result.day_contributions;
        assert_eq!(days.len(), 32);
        assert_eq!(days[0].discounted_hours, dec("14"));
        assert_eq!(days[30].date, make_date("2025-01-31"));
        assert_eq!(days[30].discounted_hours, dec("10"));
        // 10h * 2000 + 14h * 4000
        assert_eq!(days[30].cost, dec("76000"));
        assert_eq!(days[31].discounted_hours, Decimal::ZERO);

        let discounted: Decimal = days.iter().map(|d| d.discounted_hours).sum();
        assert_eq!(discounted, dec("720"));
    }

    #[test]
    fn test_first_matching_holiday_wins() {
        let holidays = vec![
            holiday("First", "2025-01-02", "1.5"),
            holiday("Second", "2025-01-02", "3"),
        ];
        let result = price(
            ("2025-01-02", "00:00:00"),
            ("2025-01-03", "00:00:00"),
            "100000",
            "1",
            &holidays,
        );
        assert_eq!(result.day_contributions[0].holiday_name.as_deref(), Some("First"));
        assert_eq!(result.holiday_surcharge, dec("50000"));
    }

    #[test]
    fn test_inactive_holiday_skipped_for_later_active_one() {
        let mut inactive = holiday("Inactive", "2025-01-02", "3");
        inactive.is_active = false;
        let holidays = vec![inactive, holiday("Active", "2025-01-02", "1.5")];
        assert_eq!(
            find_holiday(make_date("2025-01-02"), &holidays).unwrap().name,
            "Active"
        );
    }

    #[test]
    fn test_day_costs_sum_to_base_plus_surcharge() {
        let holidays = vec![
            holiday("A", "2025-04-30", "1.3"),
            holiday("B", "2025-05-01", "1.7"),
        ];
        let result = price(
            ("2025-04-28", "07:20:00"),
            ("2025-05-03", "19:40:00"),
            "123457",
            "1",
            &holidays,
        );
        let cost_sum: Decimal = result.day_contributions.iter().map(|d| d.cost).sum();
        assert_eq!(cost_sum, result.base_rental_fee + result.holiday_surcharge);
    }

    #[test]
    fn test_audit_step_lists_holiday_dates() {
        let holidays = vec![holiday("Holiday", "2025-01-02", "1.5")];
        let result = price(
            ("2025-01-01", "10:00:00"),
            ("2025-01-03", "10:00:00"),
            "100000",
            "1",
            &holidays,
        );
        assert_eq!(result.audit_step.rule_id, "holiday_surcharge");
        assert_eq!(result.audit_step.output["holiday_dates"][0], "2025-01-02");
        assert_eq!(result.audit_step.output["holiday_surcharge"], "50000");
    }

    #[test]
    fn test_overflowing_day_cost_is_an_error() {
        let window = RentalWindow::new(
            make_datetime("2025-01-01", "10:00:00"),
            make_datetime("2025-01-03", "10:00:00"),
        );
        let tier = calculate_duration_tier(window.total_hours(), 1);
        let holidays = vec![holiday("Huge", "2025-01-02", "1000000")];

        let result = calculate_holiday_surcharge(
            &segment_by_day(&window),
            &tier.breakdown,
            dec("1000000000000000000000000"),
            Decimal::ONE,
            &holidays,
            2,
        );
        assert!(matches!(result, Err(EngineError::AmountOverflow { .. })));
    }
}
