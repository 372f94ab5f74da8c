//! Parameter sweeps comparing hybrid sort against pure merge sort.
//!
//! Each experiment returns its records so callers can inspect them; the
//! runner persists them as CSV and prints a console report.

pub mod cli;
pub mod dataset;
pub mod experiments;
pub mod runner;
pub mod table;
