//! Medicare levy calculation functionality.
//!
//! This module provides the [`MedicareLevyStrategy`], a two-band levy with a
//! low-income exemption and a shade-in band.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::MedicareLevyConfig;
use crate::error::{CalculatorError, CalculatorResult};

use super::strategy::{DeductionKind, DeductionStrategy, require_positive_income};

/// Calculates the Medicare levy.
///
/// | Taxable income                    | Levy                                   |
/// |-----------------------------------|----------------------------------------|
/// | up to `threshold1`                | nothing                                |
/// | above `threshold1` to `threshold2`| `ceil((income - threshold1) * rate1)`  |
/// | above `threshold2`                | `ceil(income * rate2)`                 |
///
/// The top band applies `rate2` to the whole taxable income, not just the
/// excess over `threshold2`. Amounts are rounded up to whole dollars.
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::{DeductionStrategy, MedicareLevyStrategy};
/// use salary_calculator::config::MedicareLevyConfig;
/// use rust_decimal::Decimal;
///
/// let strategy = MedicareLevyStrategy::new(MedicareLevyConfig {
///     threshold1: Decimal::from(21335),
///     threshold2: Decimal::from(26668),
///     rate1: Decimal::new(10, 2),
///     rate2: Decimal::new(2, 2),
/// });
///
/// assert_eq!(strategy.calculate(Decimal::from(22000)).unwrap(), Decimal::from(67));
/// ```
#[derive(Debug, Clone)]
pub struct MedicareLevyStrategy {
    config: MedicareLevyConfig,
}

impl MedicareLevyStrategy {
    /// Creates a strategy over the given levy bands.
    pub fn new(config: MedicareLevyConfig) -> Self {
        Self { config }
    }
}

impl DeductionStrategy for MedicareLevyStrategy {
    fn kind(&self) -> DeductionKind {
        DeductionKind::MedicareLevy
    }

    fn calculate(&self, taxable_income: Decimal) -> CalculatorResult<Decimal> {
        require_positive_income(taxable_income, "Taxable income must be greater than zero.")?;

        let config = &self.config;
        let levy = if taxable_income <= config.threshold1 {
            Some(Decimal::ZERO)
        } else if taxable_income <= config.threshold2 {
            (taxable_income - config.threshold1).checked_mul(config.rate1)
        } else {
            taxable_income.checked_mul(config.rate2)
        }
        .ok_or_else(|| CalculatorError::overflow("Medicare levy"))?
        .ceil();

        debug!(taxable_income = %taxable_income, levy = %levy, "Medicare levy calculated");
        Ok(levy)
    }
}
