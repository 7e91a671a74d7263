use nalgebra::Vector2;

use crate::core::constants::SOLVER_EPSILON;
use crate::core::types::{AnchorSet, Point2D, RangeSet};
use crate::validation::{check_anchors, check_ranges, SolveError};

/// Closed-form planar trilateration via a local orthonormal basis.
///
/// A pure, stateless solver: three anchor points and three range
/// measurements in, a single position estimate or a classified failure
/// out. No iteration, O(1), exact up to floating-point rounding, and
/// trivially safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrilaterationSolver {
    /// Degeneracy tolerance. Baselines and projections at or below this
    /// magnitude count as zero. Must be finite and non-negative.
    pub epsilon: f64,
}

impl Default for TrilaterationSolver {
    fn default() -> Self {
        Self { epsilon: SOLVER_EPSILON }
    }
}

impl TrilaterationSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Estimate the unknown point from three anchors and the measured
    /// distance to each.
    ///
    /// The local frame is anchored at `p1` with its x-axis along the
    /// `p1 -> p2` baseline; the two-circle intersection is solved there and
    /// transformed back to the global frame. Only the intersection branch
    /// consistent with the chosen frame is reported; when the circles cross
    /// at two points the second solution is neither returned nor flagged.
    ///
    /// Inputs are re-validated here even though callers are expected to
    /// have done so (this is the trust boundary): bad ranges yield
    /// `InvalidRange`, non-finite coordinates `InvalidAnchor`, and each
    /// geometric degeneracy its own variant. The method never panics and
    /// never returns NaN coordinates.
    pub fn solve(&self, anchors: &AnchorSet, ranges: &RangeSet) -> Result<Point2D, SolveError> {
        check_anchors(anchors)?;
        check_ranges(ranges)?;

        let p1 = anchors.p1.to_vector();

        // Local x-axis along the p1 -> p2 baseline.
        let baseline = anchors.p2.to_vector() - p1;
        let d = baseline.norm();
        if d <= self.epsilon {
            return Err(SolveError::DegenerateAnchors);
        }
        let ex: Vector2<f64> = baseline / d;

        // Split p1 -> p3 into its component along ex and the orthogonal
        // residual; the residual direction becomes the local y-axis.
        let p1p3 = anchors.p3.to_vector() - p1;
        let i = ex.dot(&p1p3);
        let residual = p1p3 - ex * i;
        let residual_norm = residual.norm();
        if residual_norm <= self.epsilon {
            return Err(SolveError::CollinearAnchors);
        }
        let ey = residual / residual_norm;

        // Equals residual_norm by construction; recomputed explicitly as an
        // independent guard on the division below.
        let j = ey.dot(&p1p3);

        let (r1, r2, r3) = (ranges.r1, ranges.r2, ranges.r3);

        // Two-circle intersection in the local frame.
        let x = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        if j.abs() <= self.epsilon {
            return Err(SolveError::DegenerateGeometry);
        }
        let y = (r1 * r1 - r3 * r3 + i * i + j * j) / (2.0 * j) - (i / j) * x;

        Ok(Point2D::from_vector(p1 + ex * x + ey * y))
    }
}
