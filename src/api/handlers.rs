//! HTTP request handlers for the Rental Pricing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{HolidayRecord, HolidayRule, active_holiday_rules};

use super::request::QuoteRequest;
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

/// Handler for POST /quote endpoint.
///
/// Accepts a quote request and returns the priced rental.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    // Request-supplied holidays replace the configured list
    let holidays = match request.holidays.clone() {
        Some(records) => {
            let records: Vec<HolidayRecord> = records.into_iter().map(Into::into).collect();
            if let Some(bad) = records
                .iter()
                .find(|r| r.price_multiplier <= Decimal::ZERO)
            {
                warn!(
                    correlation_id = %correlation_id,
                    holiday = %bad.name,
                    "Non-positive holiday multiplier"
                );
                return json_response(
                    StatusCode::BAD_REQUEST,
                    ApiError::validation_error(format!(
                        "holiday '{}' price_multiplier must be greater than zero",
                        bad.name
                    )),
                );
            }
            active_holiday_rules(&records)
        }
        None => state.config().active_holidays(),
    };

    let start_time = Instant::now();
    match perform_quote(&request, &holidays, &state) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                vehicle_category = %request.vehicle_category,
                tier = %response.pricing.tier_breakdown.tier,
                total_rental_fee = %response.pricing.total_rental_fee,
                duration_us = duration.as_micros(),
                "Quote completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Resolves configuration for a request and runs the pricing engine.
fn perform_quote(
    request: &QuoteRequest,
    holidays: &[HolidayRule],
    state: &AppState,
) -> EngineResult<QuoteResponse> {
    let config = state.config();
    let window = request.window();

    let duration_discount_rate =
        config.duration_discount_rate(request.vehicle_category, window.total_days())?;

    let membership_tier = request
        .membership_tier
        .as_deref()
        .map(|code| config.get_membership(code).cloned())
        .transpose()?;
    let membership_discount_percent = membership_tier
        .as_ref()
        .map_or(Decimal::ZERO, |tier| tier.discount_percent);

    let pricing = state.engine().compute(
        &window,
        request.daily_rate,
        holidays,
        duration_discount_rate,
        membership_discount_percent,
    )?;

    Ok(QuoteResponse {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency: config.metadata().currency.clone(),
        vehicle_category: request.vehicle_category,
        duration_discount_rate,
        membership_tier,
        pricing,
    })
}
