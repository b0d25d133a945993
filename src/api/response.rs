//! Response types for the Rental Pricing Engine API.
//!
//! This module defines the quote response, the error response structures and
//! the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MembershipTier;
use crate::error::EngineError;
use crate::models::{PricingResult, VehicleCategory};

/// Response body for a successful quote.
///
/// Wraps the deterministic [`PricingResult`] with request-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// Currency of all monetary amounts.
    pub currency: String,
    /// The vehicle category the quote is for.
    pub vehicle_category: VehicleCategory,
    /// The duration discount rate resolved from configuration.
    pub duration_discount_rate: Decimal,
    /// The renter's membership tier, if one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership_tier: Option<MembershipTier>,
    /// The pricing breakdown.
    pub pricing: PricingResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    format!("Rental end {} must be after start {}", end, start),
                    "The return time must be strictly after the pickup time",
                ),
            },
            EngineError::InvalidRate { rate } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RATE",
                    format!("Invalid daily rate: {}", rate),
                    "The daily rate must be greater than zero",
                ),
            },
            EngineError::AmountOverflow { operation } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AMOUNT_OVERFLOW",
                    format!("Amount too large while computing {}", operation),
                    "The daily rate or holiday multiplier is too large to price",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
            EngineError::DiscountNotFound { category, tier } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DISCOUNT_NOT_FOUND",
                    format!(
                        "No {} duration discount configured for category '{}'",
                        tier, category
                    ),
                    "Rentals of this length are not offered for this vehicle category",
                ),
            },
            EngineError::MembershipNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MEMBERSHIP_NOT_FOUND",
                    format!("Membership tier not found: {}", code),
                    format!("The membership tier '{}' is not configured", code),
                ),
            },
        }
    }
}
