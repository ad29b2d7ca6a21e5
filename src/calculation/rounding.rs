//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to cents, with halves rounded away from zero.
///
/// Every amount the engine rounds is non-negative at the point of rounding
/// (or floored to zero right after), so this is round-half-up.
///
/// # Examples
///
/// ```
/// use salary_simulator::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("96.225").unwrap()), Decimal::from_str("96.23").unwrap());
/// assert_eq!(round2(Decimal::from_str("89.00125").unwrap()), Decimal::from_str("89.00").unwrap());
/// ```
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
