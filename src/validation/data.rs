//! Defensive input re-validation at the solver's trust boundary
//!
//! Callers are expected to reject missing, non-numeric or non-positive
//! input before invoking the solver, but the solver re-checks here before
//! any arithmetic so that bad values become typed errors instead of NaN
//! flowing through the geometry.

use crate::core::types::{AnchorSet, RangeSet};
use crate::validation::error::SolveError;

/// Every range must be finite and strictly positive.
pub fn check_ranges(ranges: &RangeSet) -> Result<(), SolveError> {
    for (index, value) in [(1u8, ranges.r1), (2, ranges.r2), (3, ranges.r3)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SolveError::InvalidRange { index, value });
        }
    }
    Ok(())
}

/// Every anchor coordinate must be finite. Coincidence and collinearity are
/// not checked here; the solver's epsilon-guarded basis construction is the
/// authoritative, tolerance-aware check for those.
pub fn check_anchors(anchors: &AnchorSet) -> Result<(), SolveError> {
    for (index, point) in [(1u8, anchors.p1), (2, anchors.p2), (3, anchors.p3)] {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(SolveError::InvalidAnchor { index });
        }
    }
    Ok(())
}
