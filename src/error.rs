//! Error types for the Rental Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing a rental.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Rental Pricing Engine.
///
/// The pricing engine itself fails with [`EngineError::InvalidRange`],
/// [`EngineError::InvalidRate`] or, for amounts too large for a `Decimal`,
/// [`EngineError::AmountOverflow`]. The remaining variants come from the
/// configuration providers.
///
/// # Example
///
/// ```
/// use rental_pricing::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The rental window ends at or before its start.
    #[error("Invalid rental window: end {end} is not after start {start}")]
    InvalidRange {
        /// The start of the rejected window.
        start: NaiveDateTime,
        /// The end of the rejected window.
        end: NaiveDateTime,
    },

    /// The daily rate was zero or negative.
    #[error("Invalid daily rate: {rate} (must be greater than zero)")]
    InvalidRate {
        /// The rejected daily rate.
        rate: Decimal,
    },

    /// An intermediate amount exceeded the `Decimal` range.
    #[error("Amount overflow while computing {operation}")]
    AmountOverflow {
        /// The amount being computed when the overflow occurred.
        operation: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values outside their allowed range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the offending value.
        message: String,
    },

    /// No duration discount is configured for the category and tier.
    #[error("Duration discount not found for category '{category}' and tier '{tier}'")]
    DiscountNotFound {
        /// The vehicle category.
        category: String,
        /// The duration tier.
        tier: String,
    },

    /// Membership tier code was not found in the configuration.
    #[error("Membership tier not found: {code}")]
    MembershipNotFound {
        /// The membership code that was not found.
        code: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub(crate) fn overflow(operation: &str) -> Self {
        EngineError::AmountOverflow {
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_invalid_range_displays_both_ends() {
        let error = EngineError::InvalidRange {
            start: make_datetime("2025-01-03 10:00:00"),
            end: make_datetime("2025-01-01 10:00:00"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rental window: end 2025-01-01 10:00:00 is not after start 2025-01-03 10:00:00"
        );
    }

    #[test]
    fn test_invalid_rate_displays_rate() {
        let error = EngineError::InvalidRate {
            rate: Decimal::from_str("-5").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid daily rate: -5 (must be greater than zero)"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/pricing.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/pricing.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_discount_not_found_displays_category_and_tier() {
        let error = EngineError::DiscountNotFound {
            category: "premium".to_string(),
            tier: "yearly".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Duration discount not found for category 'premium' and tier 'yearly'"
        );
    }

    #[test]
    fn test_amount_overflow_displays_operation() {
        let error = EngineError::overflow("day cost");
        assert_eq!(error.to_string(), "Amount overflow while computing day cost");
    }

    #[test]
    fn test_membership_not_found_displays_code() {
        let error = EngineError::MembershipNotFound {
            code: "platinum".to_string(),
        };
        assert_eq!(error.to_string(), "Membership tier not found: platinum");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_rate() -> EngineResult<()> {
            Err(EngineError::InvalidRate {
                rate: Decimal::ZERO,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_rate()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
