//! Reverse solver: from a target net salary to employer cost proposals.
//!
//! The forward mapping from annual employer cost to net salary is piecewise
//! (bands, dependents, two tax scenarios), so it is inverted numerically. For
//! each flexible-benefit percentage a bisection over the annual cost runs for
//! a fixed number of iterations and the last evaluated candidate becomes the
//! proposal.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateDataset;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationInput, CalculationProposal, ReverseCalculationInput, SUPPORTED_LOCATION,
};

use super::cost_breakdown::{CostBreakdown, decompose_annual_cost};
use super::rounding::round2;
use super::withholding::calculate_withholding;

/// Flexible-benefit percentages swept by [`get_proposals`], ascending.
pub const BENEFIT_PERCENTAGES: [u32; 7] = [0, 5, 10, 15, 20, 25, 30];

/// Bisection steps per percentage. The search always runs exactly this many
/// steps; there is no convergence threshold.
pub const SEARCH_ITERATIONS: u32 = 50;

/// Upper end of the annual cost search range; the lower end is zero.
pub const SEARCH_UPPER_BOUND: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest accepted daily meal allowance.
pub const MAX_MEAL_ALLOWANCE_DAILY: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Largest accepted IHT or TSU percentage.
pub const MAX_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

const MAX_MEAL_ALLOWANCE_DAYS: u32 = 31;
const MAX_MEAL_ALLOWANCE_MONTHS: u32 = 12;

/// Withholding outcome of one tax scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaxOutcome {
    withheld_tax: Decimal,
    social_security: Decimal,
    net_salary: Decimal,
}

/// A candidate annual cost evaluated under both tax scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CandidateEvaluation {
    breakdown: CostBreakdown,
    max_scenario: TaxOutcome,
    min_withheld_tax: Decimal,
    min_social_security: Decimal,
    net_salary_max: Decimal,
    net_salary_min: Decimal,
}

impl CandidateEvaluation {
    fn into_proposal(self, percentage: u32) -> CalculationProposal {
        let breakdown = self.breakdown;
        CalculationProposal {
            percentage,
            annual_cost: round2(breakdown.annual_cost),
            base_salary: round2(breakdown.base_salary),
            iht: round2(breakdown.iht),
            flex_benefit: round2(breakdown.flex_benefit),
            meal_allowance: round2(breakdown.monthly_meal_allowance),
            tax_withheld: self.max_scenario.withheld_tax,
            tax_withheld_min: self.min_withheld_tax,
            social_security_max: self.max_scenario.social_security,
            social_security_min: self.min_social_security,
            net_salary_max: round2(self.net_salary_max),
            net_salary_min: round2(self.net_salary_min),
        }
    }
}

/// Produces one proposal per flexible-benefit percentage (0, 5, …, 30).
///
/// Each proposal carries the annual employer cost whose max-scenario net
/// salary matches `input.target_net_salary`, found by a 50-step bisection
/// over `[0, 1 000 000]`.
///
/// # Errors
///
/// Returns `Validation` for malformed input. Any error raised by an inner
/// withholding calculation aborts the whole sweep; no partial list is
/// returned.
///
/// # Examples
///
/// ```no_run
/// use salary_simulator::calculation::get_proposals;
/// use salary_simulator::config::ConfigLoader;
/// use salary_simulator::models::{MaritalStatus, ReverseCalculationInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/continente-2026.yaml").unwrap();
/// let input = ReverseCalculationInput {
///     target_net_salary: Decimal::from(1500),
///     location: "continente".to_string(),
///     marital_status: MaritalStatus::Single,
///     dependents: 0,
///     disability: false,
///     pay_in_twelfths: false,
///     meal_allowance_daily: Decimal::from_str("10.20").unwrap(),
///     meal_allowance_days: 22,
///     meal_allowance_months: 11,
///     iht_percentage: Decimal::ZERO,
///     tsu_percentage: Decimal::from_str("23.75").unwrap(),
///     social_security_rate: Decimal::from_str("0.11").unwrap(),
/// };
///
/// let proposals = get_proposals(&input, loader.dataset()).unwrap();
/// assert_eq!(proposals.len(), 7);
/// ```
pub fn get_proposals(
    input: &ReverseCalculationInput,
    dataset: &RateDataset,
) -> EngineResult<Vec<CalculationProposal>> {
    validate_reverse_input(input)?;

    BENEFIT_PERCENTAGES
        .iter()
        .map(|&percentage| solve_for_percentage(input, dataset, percentage))
        .collect()
}

/// Evaluates a known annual employer cost for one benefit percentage.
///
/// This is the forward direction of the solver. `input.target_net_salary`
/// is not used.
pub fn proposal_for_annual_cost(
    input: &ReverseCalculationInput,
    dataset: &RateDataset,
    annual_cost: Decimal,
    percentage: u32,
) -> EngineResult<CalculationProposal> {
    validate_reverse_input(input)?;
    if annual_cost < Decimal::ZERO || annual_cost > SEARCH_UPPER_BOUND {
        return Err(EngineError::validation(
            "annual_cost",
            format!(
                "must be between 0 and {}, got {}",
                SEARCH_UPPER_BOUND, annual_cost
            ),
        ));
    }

    Ok(evaluate_candidate(input, dataset, annual_cost, percentage)?.into_proposal(percentage))
}

fn solve_for_percentage(
    input: &ReverseCalculationInput,
    dataset: &RateDataset,
    percentage: u32,
) -> EngineResult<CalculationProposal> {
    let mut lower = Decimal::ZERO;
    let mut upper = SEARCH_UPPER_BOUND;
    let midpoint = |lower: Decimal, upper: Decimal| (lower + upper) / Decimal::TWO;

    // First evaluation counts towards the fixed iteration budget
    let mut candidate = evaluate_candidate(input, dataset, midpoint(lower, upper), percentage)?;

    for _ in 1..SEARCH_ITERATIONS {
        // Max scenario net drives the search; the min scenario is reported only
        if candidate.net_salary_max < input.target_net_salary {
            lower = candidate.breakdown.annual_cost;
        } else {
            upper = candidate.breakdown.annual_cost;
        }
        candidate = evaluate_candidate(input, dataset, midpoint(lower, upper), percentage)?;
    }

    // No tolerance check: the last evaluated candidate is the answer

    debug!(
        percentage,
        annual_cost = %candidate.breakdown.annual_cost,
        net_salary_max = %candidate.net_salary_max,
        target_net_salary = %input.target_net_salary,
        "Solved employer cost"
    );

    Ok(candidate.into_proposal(percentage))
}

/// Runs both tax scenarios for one annual cost.
///
/// Max scenario: the benefit is left out of taxable gross and social
/// security uses the normal rate. Min scenario: the benefit is taxed as
/// salary with social security switched off for that call, and social
/// security is charged separately on the benefit-free gross.
fn evaluate_candidate(
    input: &ReverseCalculationInput,
    dataset: &RateDataset,
    annual_cost: Decimal,
    percentage: u32,
) -> EngineResult<CandidateEvaluation> {
    let breakdown = decompose_annual_cost(annual_cost, percentage, input);
    let gross = breakdown.monthly_gross;
    let benefit = breakdown.flex_benefit;
    let meal = breakdown.monthly_meal_allowance;

    let max_scenario = withhold(input, dataset, gross, input.social_security_rate)?;
    let net_salary_max = max_scenario.net_salary + meal + benefit;

    let min_scenario = withhold(input, dataset, gross + benefit, Decimal::ZERO)?;
    let min_social_security = round2(gross * input.social_security_rate).max(Decimal::ZERO);
    let net_salary_min =
        (gross + benefit) - min_scenario.withheld_tax - min_social_security + meal;

    Ok(CandidateEvaluation {
        breakdown,
        max_scenario,
        min_withheld_tax: min_scenario.withheld_tax,
        min_social_security,
        net_salary_max,
        net_salary_min,
    })
}

/// Calls the withholding engine for a monthly gross.
///
/// A non-positive gross (an annual cost that does not even cover the meal
/// allowance) has nothing to withhold and is passed through untaxed.
fn withhold(
    input: &ReverseCalculationInput,
    dataset: &RateDataset,
    gross_salary: Decimal,
    social_security_rate: Decimal,
) -> EngineResult<TaxOutcome> {
    if gross_salary <= Decimal::ZERO {
        return Ok(TaxOutcome {
            withheld_tax: Decimal::ZERO,
            social_security: Decimal::ZERO,
            net_salary: gross_salary,
        });
    }

    let calculation = CalculationInput {
        gross_salary,
        marital_status: input.marital_status,
        location: input.location.clone(),
        dependents: input.dependents,
        disability: input.disability,
        social_security_rate: Some(social_security_rate),
    };
    let result = calculate_withholding(&calculation, dataset)?;

    Ok(TaxOutcome {
        withheld_tax: result.withheld_tax,
        social_security: result.social_security,
        net_salary: result.net_salary,
    })
}

fn validate_reverse_input(input: &ReverseCalculationInput) -> EngineResult<()> {
    if input.location != SUPPORTED_LOCATION {
        return Err(EngineError::validation(
            "location",
            format!(
                "only '{}' is supported, got '{}'",
                SUPPORTED_LOCATION, input.location
            ),
        ));
    }

    if input.target_net_salary <= Decimal::ZERO {
        return Err(EngineError::validation(
            "target_net_salary",
            format!("must be greater than zero, got {}", input.target_net_salary),
        ));
    }

    // Upper bounds keep every intermediate product inside Decimal's range
    let bounded = [
        ("meal_allowance_daily", input.meal_allowance_daily, MAX_MEAL_ALLOWANCE_DAILY),
        ("iht_percentage", input.iht_percentage, MAX_PERCENTAGE),
        ("tsu_percentage", input.tsu_percentage, MAX_PERCENTAGE),
    ];
    for (field, value, max) in bounded {
        if value < Decimal::ZERO || value > max {
            return Err(EngineError::validation(
                field,
                format!("must be between 0 and {}, got {}", max, value),
            ));
        }
    }

    if input.meal_allowance_days > MAX_MEAL_ALLOWANCE_DAYS {
        return Err(EngineError::validation(
            "meal_allowance_days",
            format!(
                "must be at most {}, got {}",
                MAX_MEAL_ALLOWANCE_DAYS, input.meal_allowance_days
            ),
        ));
    }

    if input.meal_allowance_months > MAX_MEAL_ALLOWANCE_MONTHS {
        return Err(EngineError::validation(
            "meal_allowance_months",
            format!(
                "must be at most {}, got {}",
                MAX_MEAL_ALLOWANCE_MONTHS, input.meal_allowance_months
            ),
        ));
    }

    if input.social_security_rate < Decimal::ZERO || input.social_security_rate > Decimal::ONE {
        return Err(EngineError::validation(
            "social_security_rate",
            format!("must be between 0 and 1, got {}", input.social_security_rate),
        ));
    }

    Ok(())
}
