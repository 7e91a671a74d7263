//! Input validation and error classification

pub mod data;
pub mod error;

pub use data::{check_anchors, check_ranges};
pub use error::SolveError;
