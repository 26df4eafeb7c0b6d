//! Deduction aggregation functionality.
//!
//! This module provides the [`DeductionAggregator`], which runs the income
//! tax, Medicare levy and budget repair levy strategies against the same
//! taxable income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, CalculatorResult};

use super::budget_repair_levy::BudgetRepairLevyStrategy;
use super::income_tax::IncomeTaxStrategy;
use super::medicare_levy::MedicareLevyStrategy;
use super::rounding::round_money;
use super::strategy::DeductionStrategy;

/// The three deductions owed on a taxable income, each rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deductions {
    /// Income tax.
    pub income_tax: Decimal,
    /// Medicare levy.
    pub medicare_levy: Decimal,
    /// Budget repair levy.
    pub budget_repair_levy: Decimal,
}

impl Deductions {
    /// Returns the sum of all three deductions.
    ///
    /// Fails with [`CalculatorError::Overflow`] when the sum does not fit in
    /// a `Decimal`.
    pub fn total(&self) -> CalculatorResult<Decimal> {
        self.income_tax
            .checked_add(self.medicare_levy)
            .and_then(|sum| sum.checked_add(self.budget_repair_levy))
            .ok_or_else(|| CalculatorError::overflow("total deductions"))
    }
}

/// Runs every deduction strategy against one taxable income.
///
/// The strategies are independent of one another; each result is rounded
/// to two decimal places on its own. Any strategy error is returned as is.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::DeductionAggregator;
/// use salary_calculator::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/salary_calculator.yaml").unwrap();
/// let aggregator = DeductionAggregator::from_config(loader.config());
///
/// let deductions = aggregator.calculate_deductions(Decimal::from(50000)).unwrap();
/// assert_eq!(deductions.income_tax, Decimal::from(7797));
/// assert_eq!(deductions.budget_repair_levy, Decimal::ZERO);
/// ```
pub struct DeductionAggregator {
    income_tax: Box<dyn DeductionStrategy>,
    medicare_levy: Box<dyn DeductionStrategy>,
    budget_repair_levy: Box<dyn DeductionStrategy>,
}

impl DeductionAggregator {
    /// Creates an aggregator from explicit strategies.
    pub fn new(
        income_tax: Box<dyn DeductionStrategy>,
        medicare_levy: Box<dyn DeductionStrategy>,
        budget_repair_levy: Box<dyn DeductionStrategy>,
    ) -> Self {
        Self {
            income_tax,
            medicare_levy,
            budget_repair_levy,
        }
    }

    /// Creates an aggregator using the standard strategies over the given
    /// configuration.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(
            Box::new(IncomeTaxStrategy::new(config.income_tax.clone())),
            Box::new(MedicareLevyStrategy::new(config.medicare_levy.clone())),
            Box::new(BudgetRepairLevyStrategy::new(
                config.budget_repair_levy.clone(),
            )),
        )
    }

    /// Calculates all three deductions for `taxable_income`.
    pub fn calculate_deductions(&self, taxable_income: Decimal) -> CalculatorResult<Deductions> {
        let income_tax = self.income_tax.calculate(taxable_income)?;
        let medicare_levy = self.medicare_levy.calculate(taxable_income)?;
        let budget_repair_levy = self.budget_repair_levy.calculate(taxable_income)?;

        Ok(Deductions {
            income_tax: round_money(income_tax),
            medicare_levy: round_money(medicare_levy),
            budget_repair_levy: round_money(budget_repair_levy),
        })
    }
}

impl std::fmt::Debug for DeductionAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeductionAggregator")
            .field("income_tax", &self.income_tax.kind())
            .field("medicare_levy", &self.medicare_levy.kind())
            .field("budget_repair_levy", &self.budget_repair_levy.kind())
            .finish()
    }
}
