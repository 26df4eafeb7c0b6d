//! Calculation logic for the salary calculator.
//!
//! This module contains the deduction strategies (income tax, Medicare levy
//! and budget repair levy), the aggregator that runs them together, and the
//! calculator that derives superannuation, net income and the pay packet
//! from a gross package.

mod breakdown;
mod budget_repair_levy;
mod deductions;
mod income_tax;
mod medicare_levy;
mod rounding;
mod strategy;

pub use breakdown::SalaryBreakdownCalculator;
pub use budget_repair_levy::BudgetRepairLevyStrategy;
pub use deductions::{DeductionAggregator, Deductions};
pub use income_tax::IncomeTaxStrategy;
pub use medicare_levy::MedicareLevyStrategy;
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
pub use strategy::{DeductionKind, DeductionStrategy};
