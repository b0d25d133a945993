//! Membership discount calculation.
//!
//! The membership discount is a flat percentage taken off the subtotal after
//! duration and holiday pricing. It is never applied per day.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::round_currency;

/// The result of applying a membership discount.
#[derive(Debug, Clone)]
pub struct MembershipDiscountResult {
    /// The amount taken off the subtotal.
    pub discount_amount: Decimal,
    /// The subtotal less the discount.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies a membership discount percentage to a subtotal.
///
/// # Arguments
///
/// * `subtotal` - The rental fee including holiday surcharges
/// * `discount_percent` - The membership discount, between 0 and 100
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// [`EngineError::AmountOverflow`] if `subtotal × discount_percent` exceeds the
/// `Decimal` range.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::apply_membership_discount;
/// use rust_decimal::Decimal;
///
/// let result = apply_membership_discount(Decimal::from(1_000_000), Decimal::from(10), 1).unwrap();
/// assert_eq!(result.discount_amount, Decimal::from(100_000));
/// assert_eq!(result.total, Decimal::from(900_000));
/// ```
pub fn apply_membership_discount(
    subtotal: Decimal,
    discount_percent: Decimal,
    step_number: u32,
) -> EngineResult<MembershipDiscountResult> {
    let discount_amount = subtotal
        .checked_mul(discount_percent)
        .map(|amount| round_currency(amount / Decimal::ONE_HUNDRED))
        .ok_or_else(|| EngineError::overflow("membership discount"))?;
    let total = subtotal - discount_amount;

    let audit_step = AuditStep {
        step_number,
        rule_id: "membership_discount".to_string(),
        rule_name: "Membership Discount".to_string(),
        input: serde_json::json!({
            "subtotal": subtotal.to_string(),
            "discount_percent": discount_percent.normalize().to_string(),
        }),
        output: serde_json::json!({
            "discount_amount": discount_amount.to_string(),
            "total": total.to_string(),
        }),
        reasoning: format!(
            "Membership discount: {} × {}% = {}, total {}",
            subtotal,
            discount_percent.normalize(),
            discount_amount,
            total
        ),
    };

    Ok(MembershipDiscountResult {
        discount_amount,
        total,
        audit_step,
    })
}
