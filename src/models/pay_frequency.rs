//! Pay frequency model.
//!
//! This module contains the [`PayFrequency`] enumeration used to divide
//! annual net income into individual pay packets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// How often an employee is paid.
///
/// Each variant maps to a fixed number of pay periods per year, used as
/// the divisor when computing the pay packet amount.
///
/// # Example
///
/// ```
/// use salary_calculator::models::PayFrequency;
///
/// let frequency: PayFrequency = "f".parse().unwrap();
/// assert_eq!(frequency, PayFrequency::Fortnightly);
/// assert_eq!(frequency.periods_per_year(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Paid every week (52 periods).
    Weekly,
    /// Paid every second week (26 periods).
    Fortnightly,
    /// Paid every calendar month (12 periods).
    Monthly,
}

const INVALID_PAY_FREQUENCY: &str = "Invalid pay frequency. Please enter W, F, or M.";

impl PayFrequency {
    /// All pay frequencies, most frequent first.
    pub const ALL: [PayFrequency; 3] = [
        PayFrequency::Weekly,
        PayFrequency::Fortnightly,
        PayFrequency::Monthly,
    ];

    /// Returns the number of pay periods in a year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::Fortnightly => 26,
            PayFrequency::Monthly => 12,
        }
    }

    /// Returns the single-letter code accepted on the command line.
    pub fn code(self) -> char {
        match self {
            PayFrequency::Weekly => 'W',
            PayFrequency::Fortnightly => 'F',
            PayFrequency::Monthly => 'M',
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Fortnightly => "fortnightly",
            PayFrequency::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

impl FromStr for PayFrequency {
    type Err = CalculatorError;

    /// Parses a letter code (`W`, `F`, `M`) or a full name, ignoring case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "w" | "weekly" => Ok(PayFrequency::Weekly),
            "f" | "fortnightly" => Ok(PayFrequency::Fortnightly),
            "m" | "monthly" => Ok(PayFrequency::Monthly),
            _ => Err(CalculatorError::invalid_argument(
                "pay_frequency",
                INVALID_PAY_FREQUENCY,
            )),
        }
    }
}

impl TryFrom<u32> for PayFrequency {
    type Error = CalculatorError;

    /// Maps a number of pay periods per year back to its frequency.
    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        PayFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.periods_per_year() == periods)
            .ok_or_else(|| {
                CalculatorError::invalid_argument("pay_frequency", "Invalid pay frequency.")
            })
    }
}
