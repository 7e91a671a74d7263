//! Positioning algorithms

pub mod trilateration;

pub use trilateration::TrilaterationSolver;
