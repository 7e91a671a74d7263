//! Result payload for the consumer side of the solver boundary
//!
//! The solver itself has no awareness of transport or presentation; this
//! module gives embedding callers the conventional payload shape: a
//! `success` flag with either the estimated coordinates or the specific
//! message for the error variant. Field names keep the historical wire
//! shape (`latitude` carries x, `longitude` carries y).

use serde::{Deserialize, Serialize};

use crate::core::types::Point2D;
use crate::validation::error::SolveError;

/// Serializable outcome of a solve call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolveReport {
    pub fn success(point: Point2D) -> Self {
        Self {
            success: true,
            latitude: Some(point.x),
            longitude: Some(point.y),
            error: None,
        }
    }

    pub fn failure(error: &SolveError) -> Self {
        Self {
            success: false,
            latitude: None,
            longitude: None,
            error: Some(error.to_string()),
        }
    }

    pub fn from_result(result: &Result<Point2D, SolveError>) -> Self {
        match result {
            Ok(point) => Self::success(*point),
            Err(error) => Self::failure(error),
        }
    }

    /// Render the payload as a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Result<Point2D, SolveError>> for SolveReport {
    fn from(result: Result<Point2D, SolveError>) -> Self {
        Self::from_result(&result)
    }
}
