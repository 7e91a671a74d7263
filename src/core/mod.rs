//! Core types and constants for planar trilateration

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
