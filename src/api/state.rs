//! Application state for the Rental Pricing Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PricingEngine;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded pricing configuration and the engine. Handlers receive
/// it explicitly through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pricing configuration.
    config: Arc<ConfigLoader>,
    /// The pricing engine.
    engine: PricingEngine,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            engine: PricingEngine::new(),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the pricing engine.
    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }
}
