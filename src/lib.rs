//! Salary Calculator for Australian resident taxpayers
//!
//! This crate breaks a gross salary package (superannuation included) down
//! into superannuation, income tax, Medicare levy, budget repair levy, net
//! income and a per-period pay packet, using bracket tables loaded from
//! configuration.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
