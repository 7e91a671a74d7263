//! Caller-facing payload types

pub mod report;

pub use report::SolveReport;
