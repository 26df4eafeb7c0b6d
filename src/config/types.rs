//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed bracket tables that are
//! deserialized from the YAML configuration file, and the validation that
//! runs once at load time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// Income tax bracket table.
///
/// Bracket `n` starts at `threshold{n}`; income within it owes
/// `base_tax{n} + (income - threshold{n}) * rate{n}`. Income at or below
/// `threshold1` owes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxConfig {
    /// Tax-free threshold.
    pub threshold1: Decimal,
    /// Start of the second bracket.
    pub threshold2: Decimal,
    /// Start of the third bracket.
    pub threshold3: Decimal,
    /// Start of the open-ended top bracket.
    pub threshold4: Decimal,
    /// Marginal rate above `threshold1`.
    pub rate1: Decimal,
    /// Marginal rate above `threshold2`.
    pub rate2: Decimal,
    /// Marginal rate above `threshold3`.
    pub rate3: Decimal,
    /// Marginal rate above `threshold4`.
    pub rate4: Decimal,
    /// Tax owed at `threshold1`.
    pub base_tax1: Decimal,
    /// Tax owed at `threshold2`.
    pub base_tax2: Decimal,
    /// Tax owed at `threshold3`.
    pub base_tax3: Decimal,
    /// Tax owed at `threshold4`.
    pub base_tax4: Decimal,
}

impl IncomeTaxConfig {
    /// Returns the brackets as `(lower_threshold, rate, base_tax)` tuples,
    /// lowest first.
    pub fn brackets(&self) -> [(Decimal, Decimal, Decimal); 4] {
        [
            (self.threshold1, self.rate1, self.base_tax1),
            (self.threshold2, self.rate2, self.base_tax2),
            (self.threshold3, self.rate3, self.base_tax3),
            (self.threshold4, self.rate4, self.base_tax4),
        ]
    }

    fn validate(&self) -> CalculatorResult<()> {
        let brackets = self.brackets();
        for (threshold, rate, base_tax) in brackets {
            ensure_non_negative(INCOME_TAX_SECTION, "threshold", threshold)?;
            ensure_non_negative(INCOME_TAX_SECTION, "rate", rate)?;
            ensure_non_negative(INCOME_TAX_SECTION, "base_tax", base_tax)?;
        }
        let thresholds: Vec<Decimal> = brackets.iter().map(|(t, _, _)| *t).collect();
        ensure_increasing(INCOME_TAX_SECTION, &thresholds)
    }
}

/// Medicare levy table.
///
/// Income up to `threshold1` pays nothing, income up to `threshold2` pays
/// `rate1` on the excess over `threshold1`, and income above `threshold2`
/// pays `rate2` on the whole amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicareLevyConfig {
    /// Low-income exemption threshold.
    pub threshold1: Decimal,
    /// Upper end of the shade-in band.
    pub threshold2: Decimal,
    /// Shade-in rate applied to the excess over `threshold1`.
    pub rate1: Decimal,
    /// Full levy rate applied to the whole taxable income.
    pub rate2: Decimal,
}

impl MedicareLevyConfig {
    fn validate(&self) -> CalculatorResult<()> {
        ensure_non_negative(MEDICARE_LEVY_SECTION, "threshold1", self.threshold1)?;
        ensure_non_negative(MEDICARE_LEVY_SECTION, "threshold2", self.threshold2)?;
        ensure_non_negative(MEDICARE_LEVY_SECTION, "rate1", self.rate1)?;
        ensure_non_negative(MEDICARE_LEVY_SECTION, "rate2", self.rate2)?;
        ensure_increasing(MEDICARE_LEVY_SECTION, &[self.threshold1, self.threshold2])
    }
}

/// Budget repair levy: a flat surcharge on income above a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRepairLevyConfig {
    /// Income above this amount attracts the levy.
    pub threshold: Decimal,
    /// Rate applied to the excess over `threshold`.
    pub rate: Decimal,
}

impl BudgetRepairLevyConfig {
    fn validate(&self) -> CalculatorResult<()> {
        ensure_non_negative(BUDGET_REPAIR_LEVY_SECTION, "threshold", self.threshold)?;
        ensure_non_negative(BUDGET_REPAIR_LEVY_SECTION, "rate", self.rate)
    }
}

/// Superannuation settings.
///
/// The gross package already includes superannuation, so the contribution
/// is backed out as `gross * superannuation_rate / superannuation_denominator`
/// where the denominator is `100 + rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalarySettingsConfig {
    /// Superannuation guarantee rate, in percent (e.g. 9.5).
    pub superannuation_rate: Decimal,
    /// Denominator used to back superannuation out of the gross package.
    pub superannuation_denominator: Decimal,
}

impl SalarySettingsConfig {
    fn validate(&self) -> CalculatorResult<()> {
        if self.superannuation_rate <= Decimal::ZERO {
            return Err(CalculatorError::ConfigurationMissing {
                section: SALARY_SETTINGS_SECTION.to_string(),
                message: "Superannuation rate must be greater than zero.".to_string(),
            });
        }
        if self.superannuation_denominator <= Decimal::ZERO {
            return Err(CalculatorError::ConfigurationMissing {
                section: SALARY_SETTINGS_SECTION.to_string(),
                message: "Superannuation denominator must be greater than zero.".to_string(),
            });
        }
        Ok(())
    }
}

/// Name of the income tax section in the configuration file.
pub const INCOME_TAX_SECTION: &str = "income_tax";
/// Name of the Medicare levy section in the configuration file.
pub const MEDICARE_LEVY_SECTION: &str = "medicare_levy";
/// Name of the budget repair levy section in the configuration file.
pub const BUDGET_REPAIR_LEVY_SECTION: &str = "budget_repair_levy";
/// Name of the salary settings section in the configuration file.
pub const SALARY_SETTINGS_SECTION: &str = "salary_settings";

/// Configuration file structure as it appears on disk.
///
/// Every section is optional here so that an absent section is reported
/// as [`CalculatorError::ConfigurationMissing`] rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConfigFile {
    pub income_tax: Option<IncomeTaxConfig>,
    pub medicare_levy: Option<MedicareLevyConfig>,
    pub budget_repair_levy: Option<BudgetRepairLevyConfig>,
    pub salary_settings: Option<SalarySettingsConfig>,
}

impl ConfigFile {
    /// Requires every section to be present and assembles the validated
    /// configuration.
    pub(crate) fn into_config(self) -> CalculatorResult<CalculatorConfig> {
        let config = CalculatorConfig {
            income_tax: require_section(self.income_tax, INCOME_TAX_SECTION)?,
            medicare_levy: require_section(self.medicare_levy, MEDICARE_LEVY_SECTION)?,
            budget_repair_levy: require_section(
                self.budget_repair_levy,
                BUDGET_REPAIR_LEVY_SECTION,
            )?,
            salary_settings: require_section(self.salary_settings, SALARY_SETTINGS_SECTION)?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// The complete calculator configuration.
///
/// Built once at startup and then shared read-only by every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculatorConfig {
    /// Income tax brackets.
    pub income_tax: IncomeTaxConfig,
    /// Medicare levy bands.
    pub medicare_levy: MedicareLevyConfig,
    /// Budget repair levy threshold and rate.
    pub budget_repair_levy: BudgetRepairLevyConfig,
    /// Superannuation settings.
    pub salary_settings: SalarySettingsConfig,
}

impl CalculatorConfig {
    /// Checks every section against its invariants.
    ///
    /// Thresholds must be strictly increasing within a table, all amounts
    /// and rates must be non-negative, and the superannuation rate and
    /// denominator must be strictly positive.
    pub fn validate(&self) -> CalculatorResult<()> {
        self.income_tax.validate()?;
        self.medicare_levy.validate()?;
        self.budget_repair_levy.validate()?;
        self.salary_settings.validate()
    }
}

fn require_section<T>(section: Option<T>, name: &str) -> CalculatorResult<T> {
    section.ok_or_else(|| CalculatorError::ConfigurationMissing {
        section: name.to_string(),
        message: "section is absent".to_string(),
    })
}

fn ensure_non_negative(section: &str, field: &str, value: Decimal) -> CalculatorResult<()> {
    if value < Decimal::ZERO {
        return Err(CalculatorError::InvalidConfig {
            section: section.to_string(),
            message: format!("{} must not be negative (got {})", field, value),
        });
    }
    Ok(())
}

fn ensure_increasing(section: &str, thresholds: &[Decimal]) -> CalculatorResult<()> {
    for pair in thresholds.windows(2) {
        if pair[1] <= pair[0] {
            return Err(CalculatorError::InvalidConfig {
                section: section.to_string(),
                message: format!(
                    "thresholds must be strictly increasing ({} is not above {})",
                    pair[1], pair[0]
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn income_tax() -> IncomeTaxConfig {
        IncomeTaxConfig {
            threshold1: dec("18200"),
            threshold2: dec("37000"),
            threshold3: dec("87000"),
            threshold4: dec("180000"),
            rate1: dec("0.19"),
            rate2: dec("0.325"),
            rate3: dec("0.37"),
            rate4: dec("0.47"),
            base_tax1: dec("0"),
            base_tax2: dec("3572"),
            base_tax3: dec("19822"),
            base_tax4: dec("54232"),
        }
    }

    fn config() -> CalculatorConfig {
        CalculatorConfig {
            income_tax: income_tax(),
            medicare_levy: MedicareLevyConfig {
                threshold1: dec("21335"),
                threshold2: dec("26668"),
                rate1: dec("0.10"),
                rate2: dec("0.02"),
            },
            budget_repair_levy: BudgetRepairLevyConfig {
                threshold: dec("180000"),
                rate: dec("0.02"),
            },
            salary_settings: SalarySettingsConfig {
                superannuation_rate: dec("9.5"),
                superannuation_denominator: dec("109.5"),
            },
        }
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_brackets_are_ordered_lowest_first() {
        let brackets = income_tax().brackets();
        assert_eq!(brackets[0], (dec("18200"), dec("0.19"), dec("0")));
        assert_eq!(brackets[3], (dec("180000"), dec("0.47"), dec("54232")));
    }

    #[test]
    fn test_non_increasing_income_tax_thresholds_rejected() {
        let mut config = config();
        config.income_tax.threshold3 = dec("37000");

        match config.validate() {
            Err(CalculatorError::InvalidConfig { section, message }) => {
                assert_eq!(section, "income_tax");
                assert!(message.contains("strictly increasing"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_medicare_thresholds_rejected() {
        let mut config = config();
        config.medicare_levy.threshold2 = dec("20000");

        match config.validate() {
            Err(CalculatorError::InvalidConfig { section, .. }) => {
                assert_eq!(section, "medicare_levy");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut config = config();
        config.budget_repair_levy.rate = dec("-0.02");

        match config.validate() {
            Err(CalculatorError::InvalidConfig { section, message }) => {
                assert_eq!(section, "budget_repair_levy");
                assert!(message.contains("rate"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_superannuation_rate_reported_as_missing() {
        let mut config = config();
        config.salary_settings.superannuation_rate = Decimal::ZERO;

        match config.validate() {
            Err(CalculatorError::ConfigurationMissing { section, message }) => {
                assert_eq!(section, "salary_settings");
                assert_eq!(message, "Superannuation rate must be greater than zero.");
            }
            other => panic!("Expected ConfigurationMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_superannuation_denominator_reported_as_missing() {
        let mut config = config();
        config.salary_settings.superannuation_denominator = dec("-109.5");

        match config.validate() {
            Err(CalculatorError::ConfigurationMissing { message, .. }) => {
                assert_eq!(
                    message,
                    "Superannuation denominator must be greater than zero."
                );
            }
            other => panic!("Expected ConfigurationMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_section_reported_by_name() {
        let file = ConfigFile {
            income_tax: Some(income_tax()),
            ..ConfigFile::default()
        };

        match file.into_config() {
            Err(CalculatorError::ConfigurationMissing { section, .. }) => {
                assert_eq!(section, "medicare_levy");
            }
            other => panic!("Expected ConfigurationMissing, got {:?}", other),
        }
    }
}
