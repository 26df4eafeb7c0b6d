//! Salary breakdown model.
//!
//! This module contains the [`SalaryBreakdown`] type returned by every
//! successful calculation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::display;

/// The result of breaking a gross salary package down into its parts.
///
/// Monetary values are rounded to two decimal places, except
/// `gross_package` (kept as supplied) and `taxable_income` (kept
/// unrounded so that `super_contribution + taxable_income` reconstructs the
/// package before rounding).
///
/// # Example
///
/// ```
/// use salary_calculator::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let breakdown = SalaryBreakdown {
///     gross_package: dec("1"),
///     super_contribution: dec("0.09"),
///     taxable_income: dec("0.9132"),
///     medicare_levy: dec("0"),
///     budget_repair_levy: dec("0"),
///     income_tax: dec("0"),
///     net_income: dec("0.91"),
///     pay_packet_amount: dec("0.08"),
/// };
/// assert!(breakdown.to_string().contains("Pay Packet Amount: $0.08"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// The gross package as supplied, superannuation included.
    pub gross_package: Decimal,
    /// The superannuation contribution backed out of the package.
    pub super_contribution: Decimal,
    /// Gross package minus superannuation; the base for every deduction.
    pub taxable_income: Decimal,
    /// Medicare levy.
    pub medicare_levy: Decimal,
    /// Budget repair levy.
    pub budget_repair_levy: Decimal,
    /// Income tax.
    pub income_tax: Decimal,
    /// Annual income after superannuation and all deductions.
    pub net_income: Decimal,
    /// Net income for a single pay period.
    pub pay_packet_amount: Decimal,
}

impl fmt::Display for SalaryBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display::render_breakdown(self))
    }
}
