//! Decomposition of an annual employer cost into monthly pay components.

use rust_decimal::Decimal;

use crate::models::ReverseCalculationInput;

/// Months pay is spread over when subsidies are paid in twelfths.
pub const MONTHS_IN_TWELFTHS: u32 = 12;

/// Months pay is spread over with separate holiday and Christmas subsidies.
pub const MONTHS_WITH_SUBSIDIES: u32 = 14;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Monthly pay components implied by an annual employer cost.
///
/// Amounts are unrounded; rounding happens when a proposal is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBreakdown {
    /// The annual employer cost that was decomposed.
    pub annual_cost: Decimal,
    /// Number of salary payments per year (12 or 14).
    pub months: u32,
    /// Meal allowance paid each month.
    pub monthly_meal_allowance: Decimal,
    /// Monthly flexible-benefit value.
    pub flex_benefit: Decimal,
    /// Monthly gross salary (base plus IHT).
    pub monthly_gross: Decimal,
    /// IHT supplement included in the monthly gross.
    pub iht: Decimal,
    /// Base salary: monthly gross minus IHT.
    pub base_salary: Decimal,
}

/// Splits an annual employer cost into monthly salary, benefit and meal
/// allowance for a flexible-benefit percentage.
///
/// The annual meal allowance comes off the top. The remaining budget is
/// de-grossed by `(1 − p)(1 + TSU) + p`, since the employer surcharge applies
/// to salary but not to benefits. A share `p` of the distributable amount
/// becomes benefits (paid monthly over 12 months); the rest is gross salary
/// spread over 12 or 14 payments, of which `IHT% / (100 + IHT%)` is the IHT
/// supplement.
///
/// # Examples
///
/// ```
/// use salary_simulator::calculation::decompose_annual_cost;
/// use salary_simulator::models::{MaritalStatus, ReverseCalculationInput};
/// use rust_decimal::Decimal;
///
/// let input = ReverseCalculationInput {
///     target_net_salary: Decimal::from(1000),
///     location: "continente".to_string(),
///     marital_status: MaritalStatus::Single,
///     dependents: 0,
///     disability: false,
///     pay_in_twelfths: true,
///     meal_allowance_daily: Decimal::ZERO,
///     meal_allowance_days: 0,
///     meal_allowance_months: 0,
///     iht_percentage: Decimal::ZERO,
///     tsu_percentage: Decimal::ZERO,
///     social_security_rate: Decimal::ZERO,
/// };
///
/// let breakdown = decompose_annual_cost(Decimal::from(24_000), 0, &input);
/// assert_eq!(breakdown.monthly_gross, Decimal::from(2_000));
/// ```
pub fn decompose_annual_cost(
    annual_cost: Decimal,
    percentage: u32,
    input: &ReverseCalculationInput,
) -> CostBreakdown {
    let share = Decimal::from(percentage) / Decimal::ONE_HUNDRED;
    let months = if input.pay_in_twelfths {
        MONTHS_IN_TWELFTHS
    } else {
        MONTHS_WITH_SUBSIDIES
    };

    let monthly_meal_allowance =
        input.meal_allowance_daily * Decimal::from(input.meal_allowance_days);
    let annual_meal_allowance = monthly_meal_allowance * Decimal::from(input.meal_allowance_months);

    let budget = annual_cost - annual_meal_allowance;
    let surcharge = Decimal::ONE + input.tsu_percentage / Decimal::ONE_HUNDRED;
    let factor = (Decimal::ONE - share) * surcharge + share;
    let distributable = budget / factor;

    let flex_benefit = distributable * share / MONTHS_PER_YEAR;
    let gross_share = distributable * (Decimal::ONE - share);
    let monthly_gross = gross_share / Decimal::from(months);

    let iht = monthly_gross * input.iht_percentage / (Decimal::ONE_HUNDRED + input.iht_percentage);
    let base_salary = monthly_gross - iht;

    CostBreakdown {
        annual_cost,
        months,
        monthly_meal_allowance,
        flex_benefit,
        monthly_gross,
        iht,
        base_salary,
    }
}
