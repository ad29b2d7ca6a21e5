//! Core data models for the salary simulator.
//!
//! This module contains the request and result values exchanged with the
//! withholding engine and the reverse solver.

mod proposal;
mod withholding;

pub use proposal::{CalculationProposal, DEFAULT_TSU_PERCENTAGE, ReverseCalculationInput};
pub use withholding::{
    CalculationInput, CalculationResult, DEFAULT_SOCIAL_SECURITY_RATE, MaritalStatus,
    SUPPORTED_LOCATION,
};
