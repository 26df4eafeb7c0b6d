//! Core data models for the salary calculator.
//!
//! This module contains the pay frequency enumeration and the salary
//! breakdown record produced by a calculation.

mod pay_frequency;
mod salary_breakdown;

pub use pay_frequency::PayFrequency;
pub use salary_breakdown::SalaryBreakdown;
