//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the bracket
//! tables and salary settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{CalculatorError, CalculatorResult};

use super::types::{
    BudgetRepairLevyConfig, CalculatorConfig, ConfigFile, IncomeTaxConfig, MedicareLevyConfig,
    SalarySettingsConfig,
};

/// Default location of the configuration file, relative to the working
/// directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/salary_calculator.yaml";

/// Loads and provides access to the calculator configuration.
///
/// # File Structure
///
/// ```text
/// income_tax:
///   threshold1: 18200
///   ...
///   base_tax4: 54232
/// medicare_levy:
///   threshold1: 21335
///   threshold2: 26668
///   rate1: 0.10
///   rate2: 0.02
/// budget_repair_levy:
///   threshold: 180000
///   rate: 0.02
/// salary_settings:
///   superannuation_rate: 9.5
///   superannuation_denominator: 109.5
/// ```
///
/// All four sections are required. The loaded values are validated once
/// here, so calculations never re-check the shape of their tables.
///
/// # Example
///
/// ```no_run
/// use salary_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary_calculator.yaml")?;
/// println!("Top marginal rate: {}", loader.income_tax().rate4);
/// # Ok::<(), salary_calculator::error::CalculatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A section is absent or the superannuation settings are not positive
    ///   (`ConfigurationMissing`)
    /// - A bracket table violates its ordering invariants (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(path = %path_str, "Loaded salary calculator configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text already held in memory.
    pub fn from_yaml_str(content: &str) -> CalculatorResult<Self> {
        Self::parse(content, "<memory>")
    }

    fn parse(content: &str, path: &str) -> CalculatorResult<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).map_err(|e| CalculatorError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let config = file.into_config().inspect_err(|err| {
            warn!(path = %path, error = %err, "Rejected salary calculator configuration");
        })?;

        Ok(Self { config })
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> CalculatorConfig {
        self.config
    }

    /// Returns the income tax brackets.
    pub fn income_tax(&self) -> &IncomeTaxConfig {
        &self.config.income_tax
    }

    /// Returns the Medicare levy bands.
    pub fn medicare_levy(&self) -> &MedicareLevyConfig {
        &self.config.medicare_levy
    }

    /// Returns the budget repair levy settings.
    pub fn budget_repair_levy(&self) -> &BudgetRepairLevyConfig {
        &self.config.budget_repair_levy
    }

    /// Returns the superannuation settings.
    pub fn salary_settings(&self) -> &SalarySettingsConfig {
        &self.config.salary_settings
    }
}
