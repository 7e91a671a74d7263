//! 2-D planar trilateration
//!
//! Locates an unknown point in the plane given three reference anchors and
//! the measured distance to each, via a closed-form two-circle intersection
//! in a local orthonormal basis. Degenerate anchor configurations are
//! detected with epsilon-tolerant checks and reported as typed errors.

pub mod core;
pub mod algorithms;
pub mod validation;
pub mod api;

// Re-export commonly used types
pub use crate::algorithms::trilateration::TrilaterationSolver;
pub use crate::api::report::SolveReport;
pub use crate::core::{AnchorSet, Point2D, RangeSet, DEFAULT_ANCHORS, SOLVER_EPSILON};
pub use crate::validation::error::SolveError;
