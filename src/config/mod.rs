//! Configuration loading and management for the salary calculator.
//!
//! This module provides functionality to load the income tax brackets,
//! levy bands and superannuation settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use salary_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salary_calculator.yaml").unwrap();
//! println!("Tax-free threshold: {}", config.income_tax().threshold1);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    BUDGET_REPAIR_LEVY_SECTION, BudgetRepairLevyConfig, CalculatorConfig, INCOME_TAX_SECTION,
    IncomeTaxConfig, MEDICARE_LEVY_SECTION, MedicareLevyConfig, SALARY_SETTINGS_SECTION,
    SalarySettingsConfig,
};
