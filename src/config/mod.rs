//! Configuration loading and management for the Rental Pricing Engine.
//!
//! This module loads the pricing configuration from YAML files: duration
//! discounts per vehicle category, membership tiers, and holiday records.
//!
//! # Example
//!
//! ```no_run
//! use rental_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/emotorent").unwrap();
//! println!("Loaded price list: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CategoryDiscounts, HolidaysFile, MembershipTier, MembershipsFile, PricingFile,
    PricingMetadata, RentalConfig,
};
