//! Request types for the salary simulator API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/proposals` endpoints, and their conversion into engine inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    CalculationInput, DEFAULT_SOCIAL_SECURITY_RATE, DEFAULT_TSU_PERCENTAGE, MaritalStatus,
    ReverseCalculationInput,
};

/// Working days per month that earn the meal allowance, by default.
pub const DEFAULT_MEAL_ALLOWANCE_DAYS: u32 = 22;

/// Months per year the meal allowance is paid, by default.
pub const DEFAULT_MEAL_ALLOWANCE_MONTHS: u32 = 11;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Marital situation.
    pub marital_status: MaritalStatus,
    /// Tax region.
    pub location: String,
    /// Number of dependents, as sent by the client.
    pub dependents: i64,
    /// Whether the taxpayer has a disability.
    #[serde(default)]
    pub disability: bool,
    /// Optional social-security rate override.
    #[serde(default)]
    pub social_security_rate: Option<Decimal>,
}

/// Request body for the `/proposals` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalsRequest {
    /// Monthly net salary to reach.
    pub target_net_salary: Decimal,
    /// Tax region.
    pub location: String,
    /// Marital situation.
    pub marital_status: MaritalStatus,
    /// Number of dependents, as sent by the client.
    pub dependents: i64,
    /// Whether the employee has a disability.
    #[serde(default)]
    pub disability: bool,
    /// Whether subsidies are paid in twelfths.
    #[serde(default)]
    pub pay_in_twelfths: bool,
    /// Meal allowance per working day.
    pub meal_allowance_daily: Decimal,
    /// Working days per month that earn the meal allowance.
    #[serde(default = "default_meal_allowance_days")]
    pub meal_allowance_days: u32,
    /// Months per year the meal allowance is paid.
    #[serde(default = "default_meal_allowance_months")]
    pub meal_allowance_months: u32,
    /// IHT supplement percentage.
    #[serde(default)]
    pub iht_percentage: Decimal,
    /// Employer payroll surcharge percentage.
    #[serde(default = "default_tsu_percentage")]
    pub tsu_percentage: Decimal,
    /// Employee social-security rate.
    #[serde(default = "default_social_security_rate")]
    pub social_security_rate: Decimal,
}

fn default_meal_allowance_days() -> u32 {
    DEFAULT_MEAL_ALLOWANCE_DAYS
}

fn default_meal_allowance_months() -> u32 {
    DEFAULT_MEAL_ALLOWANCE_MONTHS
}

fn default_tsu_percentage() -> Decimal {
    DEFAULT_TSU_PERCENTAGE
}

fn default_social_security_rate() -> Decimal {
    DEFAULT_SOCIAL_SECURITY_RATE
}

fn dependents_count(dependents: i64) -> Result<u32, EngineError> {
    u32::try_from(dependents).map_err(|_| {
        EngineError::validation(
            "dependents",
            format!("must be a non-negative integer, got {}", dependents),
        )
    })
}

impl TryFrom<CalculationRequest> for CalculationInput {
    type Error = EngineError;

    fn try_from(req: CalculationRequest) -> Result<Self, Self::Error> {
        Ok(CalculationInput {
            gross_salary: req.gross_salary,
            marital_status: req.marital_status,
            location: req.location,
            dependents: dependents_count(req.dependents)?,
            disability: req.disability,
            social_security_rate: req.social_security_rate,
        })
    }
}

impl TryFrom<ProposalsRequest> for ReverseCalculationInput {
    type Error = EngineError;

    fn try_from(req: ProposalsRequest) -> Result<Self, Self::Error> {
        Ok(ReverseCalculationInput {
            target_net_salary: req.target_net_salary,
            location: req.location,
            marital_status: req.marital_status,
            dependents: dependents_count(req.dependents)?,
            disability: req.disability,
            pay_in_twelfths: req.pay_in_twelfths,
            meal_allowance_daily: req.meal_allowance_daily,
            meal_allowance_days: req.meal_allowance_days,
            meal_allowance_months: req.meal_allowance_months,
            iht_percentage: req.iht_percentage,
            tsu_percentage: req.tsu_percentage,
            social_security_rate: req.social_security_rate,
        })
    }
}
