//! Deduction resolution.
//!
//! Band deductions are either a fixed amount or a formula of the form
//! `a * b * (c - R)`, where `a`, `b` and `c` are decimal literals and `R`
//! is the gross salary. No other expression syntax is accepted.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::config::Deduction;
use crate::error::{EngineError, EngineResult};

/// A parsed `a * b * (c - R)` deduction formula.
///
/// # Examples
///
/// ```
/// use salary_simulator::calculation::DeductionFormula;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let formula = DeductionFormula::from_str("0.125 * 2.60 * (1273.85 - R)").unwrap();
/// let deduction = formula.evaluate(Decimal::from(1000));
/// assert_eq!(deduction, Decimal::from_str("89.00125").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionFormula {
    /// The first factor, `a`.
    pub rate: Decimal,
    /// The second factor, `b`.
    pub multiplier: Decimal,
    /// The salary the deduction phases out at, `c`.
    pub threshold: Decimal,
}

impl DeductionFormula {
    /// Evaluates `a × b × (c − gross_salary)`.
    pub fn evaluate(&self, gross_salary: Decimal) -> Decimal {
        self.rate * self.multiplier * (self.threshold - gross_salary)
    }
}

impl FromStr for DeductionFormula {
    type Err = EngineError;

    fn from_str(expression: &str) -> Result<Self, Self::Err> {
        let unsupported = || EngineError::UnsupportedFormula {
            expression: expression.to_string(),
        };

        let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        let body = compact.strip_suffix("-R)").ok_or_else(unsupported)?;
        let (factors, threshold) = body.split_once("*(").ok_or_else(unsupported)?;
        let (rate, multiplier) = factors.split_once('*').ok_or_else(unsupported)?;

        Ok(Self {
            rate: parse_literal(rate).ok_or_else(unsupported)?,
            multiplier: parse_literal(multiplier).ok_or_else(unsupported)?,
            threshold: parse_literal(threshold).ok_or_else(unsupported)?,
        })
    }
}

/// Parses an unsigned decimal literal such as `2`, `2.60` or `1273.85`.
fn parse_literal(text: &str) -> Option<Decimal> {
    let mut parts = text.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }

    Decimal::from_str(text).ok()
}

/// Resolves a band deduction to an amount for the given gross salary.
///
/// Fixed amounts are returned as-is; formulas are parsed and evaluated.
/// Returns `UnsupportedFormula` when a formula does not match the
/// `a * b * (c - R)` grammar.
pub fn resolve_deduction(deduction: &Deduction, gross_salary: Decimal) -> EngineResult<Decimal> {
    match deduction {
        Deduction::Amount(amount) => Ok(*amount),
        Deduction::Formula { formula } => {
            Ok(DeductionFormula::from_str(formula)?.evaluate(gross_salary))
        }
    }
}
