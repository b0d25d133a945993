//! Configuration types for rental pricing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{DurationTier, HolidayRecord, VehicleCategory};

/// Metadata about the pricing configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingMetadata {
    /// The human-readable name of the price list.
    pub name: String,
    /// ISO 4217 code of the currency all amounts are expressed in.
    pub currency: String,
    /// The version or effective date of the price list.
    pub version: String,
}

/// Duration discount rates for one vehicle category.
///
/// A rate is the multiplier applied to discounted hours, so `0.95` is 5% off.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDiscounts {
    /// Rate for hours in completed 30-day blocks.
    #[serde(default)]
    pub monthly: Option<Decimal>,
    /// Rate for hours in completed 365-day blocks.
    #[serde(default)]
    pub yearly: Option<Decimal>,
}

/// Pricing configuration file structure (pricing.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct PricingFile {
    /// Price list metadata.
    pub pricing: PricingMetadata,
    /// Duration discount rates by vehicle category.
    pub duration_discounts: HashMap<VehicleCategory, CategoryDiscounts>,
}

/// A membership tier and its discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipTier {
    /// The tier code used in requests (e.g., "gold").
    pub code: String,
    /// The display name of the tier.
    pub name: String,
    /// Percentage taken off the subtotal, between 0 and 100.
    pub discount_percent: Decimal,
}

/// Membership configuration file structure (memberships.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipsFile {
    /// All membership tiers.
    pub memberships: Vec<MembershipTier>,
}

/// Holiday configuration file structure (holidays.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// Holiday records as maintained by operations staff.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

/// The complete rental pricing configuration loaded from YAML files.
///
/// Duration discounts are flattened into a table keyed by
/// `(VehicleCategory, DurationTier)`.
#[derive(Debug, Clone)]
pub struct RentalConfig {
    /// Price list metadata.
    metadata: PricingMetadata,
    /// Duration discount rates.
    discounts: HashMap<(VehicleCategory, DurationTier), Decimal>,
    /// Membership tiers by code.
    memberships: HashMap<String, MembershipTier>,
    /// Holiday records, in file order.
    holidays: Vec<HolidayRecord>,
}

impl RentalConfig {
    /// Creates a new RentalConfig from its component parts.
    pub fn new(
        metadata: PricingMetadata,
        duration_discounts: HashMap<VehicleCategory, CategoryDiscounts>,
        memberships: Vec<MembershipTier>,
        holidays: Vec<HolidayRecord>,
    ) -> Self {
        let mut discounts = HashMap::new();
        for (category, rates) in duration_discounts {
            if let Some(rate) = rates.monthly {
                discounts.insert((category, DurationTier::Monthly), rate);
            }
            if let Some(rate) = rates.yearly {
                discounts.insert((category, DurationTier::Yearly), rate);
            }
        }

        let memberships = memberships
            .into_iter()
            .map(|tier| (tier.code.clone(), tier))
            .collect();

        Self {
            metadata,
            discounts,
            memberships,
            holidays,
        }
    }

    /// Returns the price list metadata.
    pub fn metadata(&self) -> &PricingMetadata {
        &self.metadata
    }

    /// Returns the configured discount rate for a category and tier, if any.
    pub fn discount(&self, category: VehicleCategory, tier: DurationTier) -> Option<Decimal> {
        self.discounts.get(&(category, tier)).copied()
    }

    /// Returns all duration discount entries.
    pub fn discounts(&self) -> &HashMap<(VehicleCategory, DurationTier), Decimal> {
        &self.discounts
    }

    /// Returns all membership tiers by code.
    pub fn memberships(&self) -> &HashMap<String, MembershipTier> {
        &self.memberships
    }

    /// Returns all holiday records.
    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }
}
