//! Data model for the trilateration solver

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A planar coordinate. Immutable value type with no identity beyond its
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// This is the forward computation of a range measurement: callers that
    /// know the true point use it to produce the distances the solver
    /// inverts.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// The three reference points with known coordinates.
///
/// Invariant (checked by the solver, not assumed): the points are not
/// collinear and no two coincide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorSet {
    pub p1: Point2D,
    pub p2: Point2D,
    pub p3: Point2D,
}

impl AnchorSet {
    pub const fn new(p1: Point2D, p2: Point2D, p3: Point2D) -> Self {
        Self { p1, p2, p3 }
    }
}

/// Distances from the unknown point to `p1`, `p2` and `p3` respectively.
///
/// Invariant: each value is finite and strictly positive. Callers validate
/// this before invoking the solver; the solver re-validates because it is
/// the trust boundary for numeric correctness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSet {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}

impl RangeSet {
    pub const fn new(r1: f64, r2: f64, r3: f64) -> Self {
        Self { r1, r2, r3 }
    }

    /// Ranges measured from `target` to each anchor in turn.
    pub fn measured_from(target: &Point2D, anchors: &AnchorSet) -> Self {
        Self {
            r1: target.distance_to(&anchors.p1),
            r2: target.distance_to(&anchors.p2),
            r3: target.distance_to(&anchors.p3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn measured_ranges_match_pointwise_distances() {
        let anchors = AnchorSet::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(0.0, 3.0),
        );
        let target = Point2D::new(1.0, 1.0);
        let ranges = RangeSet::measured_from(&target, &anchors);
        assert!((ranges.r1 - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((ranges.r2 - 10.0_f64.sqrt()).abs() < 1e-12);
        assert!((ranges.r3 - 5.0_f64.sqrt()).abs() < 1e-12);
    }
}
