//! Income tax calculation functionality.
//!
//! This module provides the [`IncomeTaxStrategy`], which evaluates taxable
//! income against a four-bracket marginal rate table with precomputed base
//! amounts.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::IncomeTaxConfig;
use crate::error::{CalculatorError, CalculatorResult};

use super::strategy::{DeductionKind, DeductionStrategy, require_positive_income};

/// Calculates income tax from a tiered bracket table.
///
/// Income at or below `threshold1` is tax free. Above it, the bracket whose
/// lower threshold is the highest one still below the income applies, and
/// the tax owed is
///
/// ```text
/// floor(base_tax + (taxable_income - lower_threshold) * rate)
/// ```
///
/// Thresholds are inclusive upper bounds of the bracket below them, so an
/// income exactly on a threshold is taxed by the lower bracket. The result
/// is truncated to whole dollars, matching the published tax tables.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::{DeductionStrategy, IncomeTaxStrategy};
/// use salary_calculator::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/salary_calculator.yaml").unwrap();
/// let strategy = IncomeTaxStrategy::new(loader.income_tax().clone());
///
/// let tax = strategy.calculate(Decimal::from(50000)).unwrap();
/// assert_eq!(tax, Decimal::from(7797));
/// ```
#[derive(Debug, Clone)]
pub struct IncomeTaxStrategy {
    config: IncomeTaxConfig,
}

impl IncomeTaxStrategy {
    /// Creates a strategy over the given bracket table.
    pub fn new(config: IncomeTaxConfig) -> Self {
        Self { config }
    }
}

impl DeductionStrategy for IncomeTaxStrategy {
    fn kind(&self) -> DeductionKind {
        DeductionKind::IncomeTax
    }

    fn calculate(&self, taxable_income: Decimal) -> CalculatorResult<Decimal> {
        require_positive_income(taxable_income, "Income must be greater than zero.")?;

        let bracket = self
            .config
            .brackets()
            .into_iter()
            .enumerate()
            .rfind(|(_, (threshold, _, _))| taxable_income > *threshold);

        let tax = match bracket {
            Some((index, (threshold, rate, base_tax))) => {
                let tax = (taxable_income - threshold)
                    .checked_mul(rate)
                    .and_then(|marginal| marginal.checked_add(base_tax))
                    .ok_or_else(|| CalculatorError::overflow("income tax"))?
                    .floor();
                debug!(
                    taxable_income = %taxable_income,
                    bracket = index + 1,
                    threshold = %threshold,
                    rate = %rate,
                    tax = %tax,
                    "Income tax calculated"
                );
                tax
            }
            None => {
                debug!(taxable_income = %taxable_income, "Income within tax-free threshold");
                Decimal::ZERO
            }
        };

        Ok(tax)
    }
}
