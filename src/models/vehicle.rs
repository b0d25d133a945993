//! Vehicle category model.

use serde::{Deserialize, Serialize};

/// The pricing category of a rental vehicle.
///
/// Duration discounts are configured per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Entry-level scooters.
    Economy,
    /// Mid-range electric motorbikes.
    Standard,
    /// High-end electric motorbikes.
    Premium,
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleCategory::Economy => write!(f, "economy"),
            VehicleCategory::Standard => write!(f, "standard"),
            VehicleCategory::Premium => write!(f, "premium"),
        }
    }
}
