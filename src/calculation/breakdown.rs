//! Salary breakdown calculation.
//!
//! This module provides the [`SalaryBreakdownCalculator`], which turns a
//! gross salary package into superannuation, deductions, net income and a
//! per-period pay packet.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{CalculatorConfig, SALARY_SETTINGS_SECTION, SalarySettingsConfig};
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{PayFrequency, SalaryBreakdown};

use super::deductions::DeductionAggregator;
use super::rounding::round_money;

/// Computes a full salary breakdown from a gross package.
///
/// The gross package includes superannuation, so the contribution is backed
/// out of it rather than added on top:
///
/// ```text
/// superannuation = gross_package * superannuation_rate / superannuation_denominator
/// taxable_income = gross_package - superannuation
/// net_income     = round2(gross_package - superannuation - deductions)
/// pay_packet     = round2(net_income / periods_per_year)
/// ```
///
/// # Examples
///
/// ```
/// use salary_calculator::calculation::SalaryBreakdownCalculator;
/// use salary_calculator::config::ConfigLoader;
/// use salary_calculator::models::PayFrequency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/salary_calculator.yaml").unwrap();
/// let calculator = SalaryBreakdownCalculator::from_config(loader.config()).unwrap();
///
/// let breakdown = calculator
///     .calculate_breakdown(Decimal::from(65000), PayFrequency::Monthly)
///     .unwrap();
///
/// assert_eq!(breakdown.super_contribution, Decimal::from_str("5639.27").unwrap());
/// assert_eq!(breakdown.income_tax, Decimal::from(10839));
/// assert_eq!(breakdown.net_income, Decimal::from_str("47333.73").unwrap());
/// assert_eq!(breakdown.pay_packet_amount, Decimal::from_str("3944.48").unwrap());
/// ```
#[derive(Debug)]
pub struct SalaryBreakdownCalculator {
    deductions: DeductionAggregator,
    superannuation_rate: Decimal,
    superannuation_denominator: Decimal,
}

impl SalaryBreakdownCalculator {
    /// Creates a calculator from a deduction aggregator and superannuation
    /// settings.
    ///
    /// Fails with [`CalculatorError::ConfigurationMissing`] when the
    /// superannuation rate or denominator is not strictly positive.
    pub fn new(
        deductions: DeductionAggregator,
        settings: &SalarySettingsConfig,
    ) -> CalculatorResult<Self> {
        if settings.superannuation_rate <= Decimal::ZERO {
            return Err(CalculatorError::ConfigurationMissing {
                section: SALARY_SETTINGS_SECTION.to_string(),
                message: "Superannuation rate must be greater than zero.".to_string(),
            });
        }
        if settings.superannuation_denominator <= Decimal::ZERO {
            return Err(CalculatorError::ConfigurationMissing {
                section: SALARY_SETTINGS_SECTION.to_string(),
                message: "Superannuation denominator must be greater than zero.".to_string(),
            });
        }

        Ok(Self {
            deductions,
            superannuation_rate: settings.superannuation_rate,
            superannuation_denominator: settings.superannuation_denominator,
        })
    }

    /// Wires the standard deduction strategies and superannuation settings
    /// from a loaded configuration.
    pub fn from_config(config: &CalculatorConfig) -> CalculatorResult<Self> {
        Self::new(
            DeductionAggregator::from_config(config),
            &config.salary_settings,
        )
    }

    /// Returns the superannuation contribution included in `gross_package`.
    ///
    /// Fails with [`CalculatorError::Overflow`] when the package is too large
    /// to multiply by the superannuation rate.
    pub fn superannuation(&self, gross_package: Decimal) -> CalculatorResult<Decimal> {
        gross_package
            .checked_mul(self.superannuation_rate)
            .and_then(|scaled| scaled.checked_div(self.superannuation_denominator))
            .ok_or_else(|| CalculatorError::overflow("superannuation"))
    }

    /// Breaks `gross_package` down for the given pay frequency.
    ///
    /// Fails with [`CalculatorError::OutOfRange`] when `gross_package` is
    /// zero or negative, and with [`CalculatorError::Overflow`] when an
    /// intermediate amount exceeds the range of `Decimal`. No partial result
    /// is produced on failure.
    pub fn calculate_breakdown(
        &self,
        gross_package: Decimal,
        pay_frequency: PayFrequency,
    ) -> CalculatorResult<SalaryBreakdown> {
        if gross_package <= Decimal::ZERO {
            warn!(gross_package = %gross_package, "Rejected non-positive gross package");
            return Err(CalculatorError::out_of_range(
                "gross_package",
                "Gross package must be greater than zero.",
            ));
        }

        let superannuation = self.superannuation(gross_package).inspect_err(|err| {
            warn!(gross_package = %gross_package, error = %err, "Gross package out of calculable range");
        })?;
        let taxable_income = gross_package - superannuation;
        debug!(
            gross_package = %gross_package,
            superannuation = %superannuation,
            taxable_income = %taxable_income,
            "Derived taxable income"
        );

        let deductions = self.deductions.calculate_deductions(taxable_income)?;

        let net_income = taxable_income
            .checked_sub(deductions.total()?)
            .map(round_money)
            .ok_or_else(|| CalculatorError::overflow("net income"))?;
        let periods = pay_frequency.periods_per_year();
        let pay_packet_amount = net_income
            .checked_div(Decimal::from(periods))
            .map(round_money)
            .ok_or_else(|| CalculatorError::overflow("pay packet amount"))?;
        debug!(
            net_income = %net_income,
            pay_frequency = %pay_frequency,
            pay_packet_amount = %pay_packet_amount,
            "Calculated net income"
        );

        Ok(SalaryBreakdown {
            gross_package,
            super_contribution: round_money(superannuation),
            taxable_income,
            medicare_levy: deductions.medicare_levy,
            budget_repair_levy: deductions.budget_repair_levy,
            income_tax: deductions.income_tax,
            net_income,
            pay_packet_amount,
        })
    }
}
