//! Withholding calculation input and result models.
//!
//! This module defines [`CalculationInput`], the taxpayer profile and monthly
//! gross salary fed to the withholding engine, and [`CalculationResult`],
//! everything the engine resolved along the way.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{Band, TableId};

/// The only tax region the engine supports.
pub const SUPPORTED_LOCATION: &str = "continente";

/// Social-security rate applied when the caller does not supply one.
pub const DEFAULT_SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(11, 0, 0, false, 2);

/// The taxpayer's marital situation for withholding purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Not married.
    Single,
    /// Married, only one spouse earns income.
    MarriedOneHolder,
    /// Married, both spouses earn income.
    MarriedTwoHolders,
}

/// Input to a single withholding calculation.
///
/// # Example
///
/// ```
/// use salary_simulator::models::{CalculationInput, MaritalStatus};
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput::new(Decimal::from(1200), MaritalStatus::Single, 0);
/// assert_eq!(input.location, "continente");
/// assert!(!input.disability);
/// assert!(input.social_security_rate.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Marital situation.
    pub marital_status: MaritalStatus,
    /// Tax region; must be `"continente"`.
    pub location: String,
    /// Number of dependents.
    pub dependents: u32,
    /// Whether the taxpayer has a disability.
    #[serde(default)]
    pub disability: bool,
    /// Employee social-security rate; defaults to 0.11.
    #[serde(default)]
    pub social_security_rate: Option<Decimal>,
}

impl CalculationInput {
    /// Creates an input for the mainland with no disability and the default
    /// social-security rate.
    pub fn new(gross_salary: Decimal, marital_status: MaritalStatus, dependents: u32) -> Self {
        Self {
            gross_salary,
            marital_status,
            location: SUPPORTED_LOCATION.to_string(),
            dependents,
            disability: false,
            social_security_rate: None,
        }
    }

    /// Returns the social-security rate, falling back to the default.
    pub fn effective_social_security_rate(&self) -> Decimal {
        self.social_security_rate.unwrap_or(DEFAULT_SOCIAL_SECURITY_RATE)
    }
}

/// The outcome of a withholding calculation.
///
/// Monetary fields are rounded to cents, half-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The table selected for the taxpayer profile.
    pub table_id: TableId,
    /// The band matched by the gross salary.
    pub band: Band,
    /// The band's marginal rate.
    pub rate: Decimal,
    /// The resolved band deduction.
    pub deduction: Decimal,
    /// The deduction granted per dependent.
    pub dependent_deduction: Decimal,
    /// Income tax withheld.
    pub withheld_tax: Decimal,
    /// Employee social-security contribution.
    pub social_security: Decimal,
    /// Net salary after withholding and social security.
    pub net_salary: Decimal,
}
