//! HTTP API module for the salary simulator.
//!
//! This module provides the REST API endpoints for the forward withholding
//! calculation and the reverse proposal sweep.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculationRequest, DEFAULT_MEAL_ALLOWANCE_DAYS, DEFAULT_MEAL_ALLOWANCE_MONTHS,
    ProposalsRequest,
};
pub use response::{ApiError, ApiErrorResponse, ProposalsResponse};
pub use state::AppState;
