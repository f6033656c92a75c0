//! Semi-monthly Payroll Engine
//!
//! This crate turns employee master data and daily attendance logs into
//! Philippine statutory-compliant pay results: hours worked, overtime,
//! lateness, undertime, holiday premiums, SSS/PhilHealth/Pag-IBIG
//! contributions, withholding tax and net pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod service;
