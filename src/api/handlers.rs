//! HTTP request handlers for the salary simulator API.
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
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CalculationInput, ReverseCalculationInput};

use super::request::{CalculationRequest, ProposalsRequest};
use super::response::{ApiError, ApiErrorResponse, ProposalsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/proposals", post(proposals_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a gross salary profile and returns the withholding breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    // Convert to the engine input; rejects negative dependents
    let input = match CalculationInput::try_from(request) {
        Ok(input) => input,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    // Perform the calculation
    let start_time = Instant::now();
    match state.simulator().calculate(&input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                table = %result.table_id,
                gross_salary = %input.gross_salary,
                withheld_tax = %result.withheld_tax,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /proposals endpoint.
///
/// Runs the reverse solver on the blocking pool and returns one proposal per
/// benefit percentage.
async fn proposals_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProposalsRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing proposals request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    // Convert to the engine input; rejects negative dependents
    let input = match ReverseCalculationInput::try_from(request) {
        Ok(input) => input,
        Err(err) => return engine_error_response(err, correlation_id),
    };

    // 350 engine calls per sweep, so keep them off the async workers
    let start_time = Instant::now();
    let simulator = state.shared_simulator();
    let target_net_salary = input.target_net_salary;
    let outcome = tokio::task::spawn_blocking(move || simulator.get_proposals(&input)).await;

    match outcome {
        Ok(Ok(proposals)) => {
            info!(
                correlation_id = %correlation_id,
                target_net_salary = %target_net_salary,
                proposals = proposals.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Proposals completed successfully"
            );
            json_response(StatusCode::OK, ProposalsResponse { proposals })
        }
        Ok(Err(err)) => engine_error_response(err, correlation_id),
        // The blocking task panicked or was cancelled
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Proposal task did not complete"
            );
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CALCULATION_ERROR", "Proposal calculation did not complete"),
            )
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure onto a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Missing fields and a non-integer dependents count are
            // validation problems, not syntax ones
            if body_text.contains("missing field") || body_text.contains("dependents: ") {
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
    json_response(StatusCode::BAD_REQUEST, error)
}
