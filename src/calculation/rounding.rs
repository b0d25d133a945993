//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the nearest whole currency unit, halves away from zero.
///
/// # Example
///
/// ```
/// use rental_pricing::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(583333, 1)), Decimal::from(58333));
/// assert_eq!(round_currency(Decimal::new(416665, 1)), Decimal::from(41667));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_up_for_positive_amounts() {
        assert_eq!(round_currency(dec("0.5")), dec("1"));
        assert_eq!(round_currency(dec("1.49")), dec("1"));
        assert_eq!(round_currency(dec("2.5")), dec("3"));
    }

    #[test]
    fn test_drops_fractional_scale() {
        let rounded = round_currency(dec("100000.0000000000000000000008"));
        assert_eq!(rounded, dec("100000"));
        assert_eq!(rounded.scale(), 0);
    }
}
