//! HTTP API module for the Rental Pricing Engine.
//!
//! This module provides the REST API endpoint for quoting a rental fee.
//! It exposes a [`Router`](axum::Router); binding it to a listener is left
//! to the host process.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayRecordRequest, QuoteRequest};
pub use response::{ApiError, ApiErrorResponse, QuoteResponse};
pub use state::AppState;
