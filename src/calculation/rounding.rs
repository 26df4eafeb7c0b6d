//! Rounding of monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept in reported amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to two decimal places, with exact midpoints
/// going to the even neighbour.
///
/// This is the rounding for every reported amount. The strategies
/// themselves floor or ceil to whole dollars before this step.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(round_money(dec("3944.4775")), dec("3944.48"));
/// assert_eq!(round_money(dec("0.125")), dec("0.12"));
/// assert_eq!(round_money(dec("0.135")), dec("0.14"));
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}
