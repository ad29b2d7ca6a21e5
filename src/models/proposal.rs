//! Reverse calculation input and proposal models.
//!
//! A reverse calculation starts from the net salary an employee should take
//! home and produces one [`CalculationProposal`] per flexible-benefit
//! percentage, each describing the employer cost and monthly pay split that
//! reaches that net salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MaritalStatus;

/// Employer payroll surcharge (TSU) applied when the caller does not supply one.
pub const DEFAULT_TSU_PERCENTAGE: Decimal = Decimal::from_parts(2375, 0, 0, false, 2);

/// Input to the reverse solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseCalculationInput {
    /// Monthly net salary the employee should receive.
    pub target_net_salary: Decimal,
    /// Tax region; must be `"continente"`.
    pub location: String,
    /// Marital situation.
    pub marital_status: MaritalStatus,
    /// Number of dependents.
    pub dependents: u32,
    /// Whether the employee has a disability.
    #[serde(default)]
    pub disability: bool,
    /// Whether the holiday and Christmas subsidies are paid in twelfths,
    /// spreading pay over 12 months instead of 14.
    pub pay_in_twelfths: bool,
    /// Meal allowance paid per working day.
    pub meal_allowance_daily: Decimal,
    /// Working days per month that earn the meal allowance.
    pub meal_allowance_days: u32,
    /// Months per year the meal allowance is paid.
    pub meal_allowance_months: u32,
    /// Share of monthly gross paid as the IHT supplement (percent, e.g. 25).
    pub iht_percentage: Decimal,
    /// Employer payroll surcharge (percent, e.g. 23.75).
    pub tsu_percentage: Decimal,
    /// Employee social-security rate (fraction, e.g. 0.11).
    pub social_security_rate: Decimal,
}

/// One point of the flexible-benefit sweep.
///
/// The max scenario treats the benefit as exempt from income tax; the min
/// scenario taxes it as salary. Both net figures are reported so callers can
/// show a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationProposal {
    /// Share of the distributable budget paid as flexible benefits (0–30).
    pub percentage: u32,
    /// Annual employer cost that reaches the target net salary.
    pub annual_cost: Decimal,
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Monthly IHT supplement.
    pub iht: Decimal,
    /// Monthly flexible-benefit value.
    pub flex_benefit: Decimal,
    /// Monthly meal allowance.
    pub meal_allowance: Decimal,
    /// Tax withheld with the benefit excluded from taxable gross.
    pub tax_withheld: Decimal,
    /// Tax withheld with the benefit included in taxable gross.
    pub tax_withheld_min: Decimal,
    /// Social security in the max scenario.
    pub social_security_max: Decimal,
    /// Social security in the min scenario.
    pub social_security_min: Decimal,
    /// Net salary when the benefit is tax-exempt.
    pub net_salary_max: Decimal,
    /// Net salary when the benefit is fully taxable.
    pub net_salary_min: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_tsu_percentage() {
        assert_eq!(DEFAULT_TSU_PERCENTAGE, Decimal::from_str("23.75").unwrap());
    }

    #[test]
    fn test_deserialize_reverse_input() {
        let json = r#"{
            "target_net_salary": "1500",
            "location": "continente",
            "marital_status": "married_two_holders",
            "dependents": 1,
            "pay_in_twelfths": true,
            "meal_allowance_daily": "10.20",
            "meal_allowance_days": 22,
            "meal_allowance_months": 11,
            "iht_percentage": "0",
            "tsu_percentage": "23.75",
            "social_security_rate": "0.11"
        }"#;

        let input: ReverseCalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.marital_status, MaritalStatus::MarriedTwoHolders);
        assert!(input.pay_in_twelfths);
        assert!(!input.disability);
        assert_eq!(input.meal_allowance_daily, Decimal::from_str("10.20").unwrap());
    }
}
