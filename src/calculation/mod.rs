//! Calculation logic for the salary simulator.
//!
//! This module contains the withholding engine (table selection, band
//! lookup, deduction resolution and the withholding formula), the
//! decomposition of an annual employer cost into monthly pay, and the
//! reverse solver that finds the employer cost reaching a target net salary.

mod band_selection;
mod cost_breakdown;
mod deduction;
mod reverse_solver;
mod rounding;
mod table_selection;
mod withholding;

pub use band_selection::select_band;
pub use cost_breakdown::{
    CostBreakdown, MONTHS_IN_TWELFTHS, MONTHS_WITH_SUBSIDIES, decompose_annual_cost,
};
pub use deduction::{DeductionFormula, resolve_deduction};
pub use reverse_solver::{
    BENEFIT_PERCENTAGES, MAX_MEAL_ALLOWANCE_DAILY, MAX_PERCENTAGE, SEARCH_ITERATIONS,
    SEARCH_UPPER_BOUND, get_proposals, proposal_for_annual_cost,
};
pub use rounding::round2;
pub use table_selection::{select_table, select_table_id};
pub use withholding::calculate_withholding;
