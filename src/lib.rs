//! Rental Pricing Engine for eMotoRent vehicle rentals
//!
//! This crate computes the rental fee for a stay: progressive duration discounts
//! for completed monthly or yearly blocks, per-day holiday surcharges, and a
//! membership discount applied to the combined total.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
