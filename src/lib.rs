//! VALUEDECK — ASIC selector and three-variable valuation calculator
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod format;
pub mod mining;
pub mod valuation;
pub mod dashboard;
