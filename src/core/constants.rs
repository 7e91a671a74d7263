//! Numeric tolerances and built-in reference data

use crate::core::types::{AnchorSet, Point2D};

/// Default tolerance for the solver's degeneracy checks. Distances and
/// projections at or below this magnitude are treated as zero, since
/// floating-point anchor inputs are rarely exactly zero even when
/// practically degenerate.
pub const SOLVER_EPSILON: f64 = 1e-12;

/// Fallback reference points for callers that have no anchors of their own
/// (Frankfurt, Ashburn and Boardman, the original deployment defaults).
/// `x` holds latitude and `y` longitude, but nothing in the solver depends
/// on that interpretation.
pub const DEFAULT_ANCHORS: AnchorSet = AnchorSet::new(
    Point2D::new(50.110889, 8.682139),
    Point2D::new(39.048111, -77.472806),
    Point2D::new(45.849100, -119.714000),
);
