//! The deduction strategy abstraction.
//!
//! Every deduction (income tax and the two levies) is evaluated against the
//! same taxable income by a type implementing [`DeductionStrategy`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// Identifies which deduction a strategy computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Tiered income tax.
    IncomeTax,
    /// Two-band Medicare levy.
    MedicareLevy,
    /// Flat surcharge above a threshold.
    BudgetRepairLevy,
}

impl fmt::Display for DeductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeductionKind::IncomeTax => "Income Tax",
            DeductionKind::MedicareLevy => "Medicare Levy",
            DeductionKind::BudgetRepairLevy => "Budget Repair Levy",
        };
        f.write_str(name)
    }
}

/// A single deduction evaluated against taxable income.
///
/// Implementations are pure: the result depends only on the taxable income
/// and the strategy's own bracket table.
pub trait DeductionStrategy: Send + Sync {
    /// Returns which deduction this strategy computes.
    fn kind(&self) -> DeductionKind;

    /// Computes the deduction owed on `taxable_income`.
    ///
    /// Fails with [`CalculatorError::OutOfRange`] when `taxable_income` is
    /// zero or negative.
    fn calculate(&self, taxable_income: Decimal) -> CalculatorResult<Decimal>;
}

/// Rejects a taxable income that is zero or negative.
pub(crate) fn require_positive_income(
    taxable_income: Decimal,
    message: &str,
) -> CalculatorResult<()> {
    if taxable_income <= Decimal::ZERO {
        return Err(CalculatorError::out_of_range("taxable_income", message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_income_accepts_small_positive() {
        assert!(require_positive_income(Decimal::new(1, 2), "msg").is_ok());
    }

    #[test]
    fn test_require_positive_income_rejects_zero_and_negative() {
        for income in [Decimal::ZERO, Decimal::new(-5000, 0)] {
            match require_positive_income(income, "Income must be greater than zero.") {
                Err(CalculatorError::OutOfRange { parameter, message }) => {
                    assert_eq!(parameter, "taxable_income");
                    assert_eq!(message, "Income must be greater than zero.");
                }
                other => panic!("Expected OutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_deduction_kind_display() {
        assert_eq!(DeductionKind::IncomeTax.to_string(), "Income Tax");
        assert_eq!(DeductionKind::MedicareLevy.to_string(), "Medicare Levy");
        assert_eq!(
            DeductionKind::BudgetRepairLevy.to_string(),
            "Budget Repair Levy"
        );
    }

    #[test]
    fn test_deduction_kind_serialization() {
        let json = serde_json::to_string(&DeductionKind::BudgetRepairLevy).unwrap();
        assert_eq!(json, "\"budget_repair_levy\"");
    }
}
