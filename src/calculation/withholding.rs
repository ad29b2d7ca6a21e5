//! Monthly IRS withholding calculation.
//!
//! This module ties table selection, band lookup and deduction resolution
//! together into the withholding engine's single entry point,
//! [`calculate_withholding`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateDataset;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, CalculationResult, SUPPORTED_LOCATION};

use super::band_selection::select_band;
use super::deduction::resolve_deduction;
use super::rounding::round2;
use super::table_selection::select_table;

/// Calculates income-tax withholding, social security and net salary.
///
/// The calculation proceeds as follows:
/// 1. Validate the input (positive gross, supported location, sane rate)
/// 2. Select the table for the taxpayer profile
/// 3. Find the band covering the gross salary
/// 4. Resolve the band deduction (literal or formula)
/// 5. `withheld = max(0, round2(gross × rate − deduction − perDependent × dependents))`
/// 6. `social security = round2(gross × ss rate)`
/// 7. `net = round2(gross − withheld − social security)`
///
/// The function is pure: the same input and dataset always give the same
/// result.
///
/// # Errors
///
/// - `Validation` for a non-positive gross salary, a location other than
///   `"continente"` or a social-security rate outside `[0, 1]`
/// - `TableNotFound`, `BandNotFound` or `UnsupportedFormula` when the
///   dataset does not fit the selection logic
///
/// # Examples
///
/// ```no_run
/// use salary_simulator::calculation::calculate_withholding;
/// use salary_simulator::config::ConfigLoader;
/// use salary_simulator::models::{CalculationInput, MaritalStatus};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/continente-2026.yaml").unwrap();
/// let input = CalculationInput::new(Decimal::from(1200), MaritalStatus::Single, 0);
///
/// let result = calculate_withholding(&input, loader.dataset()).unwrap();
/// assert_eq!(result.withheld_tax, Decimal::from_str("96.22").unwrap());
/// assert_eq!(result.net_salary, Decimal::from_str("971.78").unwrap());
/// ```
pub fn calculate_withholding(
    input: &CalculationInput,
    dataset: &RateDataset,
) -> EngineResult<CalculationResult> {
    validate_input(input)?;

    let gross = input.gross_salary;
    let table = select_table(dataset, input.marital_status, input.dependents, input.disability)?;
    let band = select_band(table, gross)?;

    let deduction = resolve_deduction(&band.deduction, gross)?;
    let dependent_deduction = band.additional_per_dependent.unwrap_or(Decimal::ZERO);
    let dependents = Decimal::from(input.dependents);

    let raw_tax = gross * band.rate - deduction - dependent_deduction * dependents;
    let withheld_tax = round2(raw_tax).max(Decimal::ZERO);
    let social_security = round2(gross * input.effective_social_security_rate());
    let net_salary = round2(gross - withheld_tax - social_security);

    debug!(
        table = %table.id,
        gross_salary = %gross,
        rate = %band.rate,
        deduction = %deduction,
        withheld_tax = %withheld_tax,
        "Resolved withholding"
    );

    Ok(CalculationResult {
        table_id: table.id,
        band: band.clone(),
        rate: band.rate,
        deduction,
        dependent_deduction,
        withheld_tax,
        social_security,
        net_salary,
    })
}

fn validate_input(input: &CalculationInput) -> EngineResult<()> {
    if input.gross_salary <= Decimal::ZERO {
        return Err(EngineError::validation(
            "gross_salary",
            format!("must be greater than zero, got {}", input.gross_salary),
        ));
    }

    if input.location != SUPPORTED_LOCATION {
        return Err(EngineError::validation(
            "location",
            format!(
                "only '{}' is supported, got '{}'",
                SUPPORTED_LOCATION, input.location
            ),
        ));
    }

    if let Some(rate) = input.social_security_rate {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(EngineError::validation(
                "social_security_rate",
                format!("must be between 0 and 1, got {}", rate),
            ));
        }
    }

    Ok(())
}
