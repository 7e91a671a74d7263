use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified solver failures.
///
/// Every degeneracy is detected and reported as a distinct variant rather
/// than producing NaN or garbage output. All variants are recoverable by
/// the caller; none are fatal to the process, and retrying is pointless
/// because the computation is deterministic and pure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolveError {
    /// A supplied distance is non-positive or non-finite.
    InvalidRange { index: u8, value: f64 },
    /// An anchor coordinate is non-finite. Callers should have validated
    /// finiteness before invoking the solver; this surfaces the contract
    /// violation as a typed error instead of NaN output.
    InvalidAnchor { index: u8 },
    /// The first two anchors coincide, leaving no baseline to orient the
    /// local frame.
    DegenerateAnchors,
    /// All three anchors lie on a single line, so no orthogonal basis
    /// exists.
    CollinearAnchors,
    /// The secondary-axis projection is numerically zero, preventing a
    /// unique solution.
    DegenerateGeometry,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidRange { index, value } => {
                write!(
                    f,
                    "range {} is invalid ({}): distances must be finite and strictly positive",
                    index, value
                )
            }
            SolveError::InvalidAnchor { index } => {
                write!(f, "anchor {} has a non-finite coordinate", index)
            }
            SolveError::DegenerateAnchors => {
                write!(f, "the first two anchors coincide: no baseline to build a local frame")
            }
            SolveError::CollinearAnchors => {
                write!(f, "the anchors are collinear: no unique position exists")
            }
            SolveError::DegenerateGeometry => {
                write!(f, "degenerate anchor geometry: the secondary axis projection vanishes")
            }
        }
    }
}

impl std::error::Error for SolveError {}
