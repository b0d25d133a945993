//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rental pricing
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{DurationTier, HolidayRule, VehicleCategory, active_holiday_rules};

use super::types::{
    HolidaysFile, MembershipTier, MembershipsFile, PricingFile, PricingMetadata, RentalConfig,
};

/// Loads and provides access to rental pricing configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// resolves the three inputs the pricing engine needs from outside: the
/// duration discount rate, the membership discount and the holiday rules.
///
/// # Directory Structure
///
/// ```text
/// config/emotorent/
/// ├── pricing.yaml       # Currency and duration discounts per vehicle category
/// ├── memberships.yaml   # Membership tiers
/// └── holidays.yaml      # Holiday records
/// ```
///
/// # Example
///
/// ```no_run
/// use rental_pricing::config::ConfigLoader;
/// use rental_pricing::models::VehicleCategory;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/emotorent").unwrap();
///
/// let rate = loader
///     .duration_discount_rate(VehicleCategory::Standard, Decimal::from(45))
///     .unwrap();
/// println!("45-day discount rate: {}", rate);
///
/// let gold = loader.get_membership("gold").unwrap();
/// println!("{}: {}% off", gold.name, gold.discount_percent);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RentalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - Any rate, percentage or multiplier is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let pricing = Self::load_yaml::<PricingFile>(&path.join("pricing.yaml"))?;
        let memberships = Self::load_yaml::<MembershipsFile>(&path.join("memberships.yaml"))?;
        let holidays = Self::load_yaml::<HolidaysFile>(&path.join("holidays.yaml"))?;

        let config = RentalConfig::new(
            pricing.pricing,
            pricing.duration_discounts,
            memberships.memberships,
            holidays.holidays,
        );
        Self::validate(&config)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks every configured value against its allowed range.
    fn validate(config: &RentalConfig) -> EngineResult<()> {
        for ((category, tier), rate) in config.discounts() {
            if *rate <= Decimal::ZERO || *rate > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "duration discount for {} {} must be in (0, 1], got {}",
                        category, tier, rate
                    ),
                });
            }
        }

        for tier in config.memberships().values() {
            if tier.discount_percent < Decimal::ZERO
                || tier.discount_percent > Decimal::ONE_HUNDRED
            {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "membership '{}' discount must be in [0, 100], got {}",
                        tier.code, tier.discount_percent
                    ),
                });
            }
        }

        for record in config.holidays() {
            if record.price_multiplier <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "holiday '{}' multiplier must be positive, got {}",
                        record.name, record.price_multiplier
                    ),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying rental configuration.
    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    /// Returns the price list metadata.
    pub fn metadata(&self) -> &PricingMetadata {
        self.config.metadata()
    }

    /// Resolves the duration discount rate for a rental.
    ///
    /// The day count is classified into a [`DurationTier`]; rentals shorter
    /// than 30 days always get a rate of `1` (no discount).
    ///
    /// # Arguments
    ///
    /// * `category` - The vehicle's pricing category
    /// * `rental_days` - The rental length in (fractional) days
    ///
    /// # Returns
    ///
    /// The rate, or `DiscountNotFound` if no rate is configured for the tier.
    pub fn duration_discount_rate(
        &self,
        category: VehicleCategory,
        rental_days: Decimal,
    ) -> EngineResult<Decimal> {
        let tier = DurationTier::for_days(rental_days);
        if tier == DurationTier::None {
            return Ok(Decimal::ONE);
        }

        self.config
            .discount(category, tier)
            .ok_or_else(|| EngineError::DiscountNotFound {
                category: category.to_string(),
                tier: tier.to_string(),
            })
    }

    /// Gets a membership tier by its code.
    pub fn get_membership(&self, code: &str) -> EngineResult<&MembershipTier> {
        self.config
            .memberships()
            .get(code)
            .ok_or_else(|| EngineError::MembershipNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the active, non-deleted, dated holiday rules.
    pub fn active_holidays(&self) -> Vec<HolidayRule> {
        active_holiday_rules(self.config.holidays())
    }
}
