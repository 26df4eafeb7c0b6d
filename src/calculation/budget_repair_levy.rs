//! Budget repair levy calculation functionality.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BudgetRepairLevyConfig;
use crate::error::{CalculatorError, CalculatorResult};

use super::strategy::{DeductionKind, DeductionStrategy, require_positive_income};

/// Calculates the budget repair levy, a flat surcharge on the part of
/// taxable income above a threshold, truncated to whole dollars.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::{BudgetRepairLevyStrategy, DeductionStrategy};
/// use salary_calculator::config::BudgetRepairLevyConfig;
/// use rust_decimal::Decimal;
///
/// let strategy = BudgetRepairLevyStrategy::new(BudgetRepairLevyConfig {
///     threshold: Decimal::from(180000),
///     rate: Decimal::new(2, 2),
/// });
///
/// assert_eq!(strategy.calculate(Decimal::from(200000)).unwrap(), Decimal::from(400));
/// assert_eq!(strategy.calculate(Decimal::from(180000)).unwrap(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct BudgetRepairLevyStrategy {
    config: BudgetRepairLevyConfig,
}

impl BudgetRepairLevyStrategy {
    /// Creates a strategy over the given threshold and rate.
    pub fn new(config: BudgetRepairLevyConfig) -> Self {
        Self { config }
    }
}

impl DeductionStrategy for BudgetRepairLevyStrategy {
    fn kind(&self) -> DeductionKind {
        DeductionKind::BudgetRepairLevy
    }

    fn calculate(&self, taxable_income: Decimal) -> CalculatorResult<Decimal> {
        require_positive_income(taxable_income, "Income must be greater than zero.")?;

        let levy = if taxable_income > self.config.threshold {
            (taxable_income - self.config.threshold)
                .checked_mul(self.config.rate)
                .ok_or_else(|| CalculatorError::overflow("budget repair levy"))?
                .floor()
        } else {
            Decimal::ZERO
        };

        debug!(taxable_income = %taxable_income, levy = %levy, "Budget repair levy calculated");
        Ok(levy)
    }
}
