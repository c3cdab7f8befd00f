// File: crates/recover-core/src/error.rs
// Summary: Per-chart error taxonomy (structure, calibration) and the per-point drop marker.

use thiserror::Error;

use crate::types::Axis;

/// Fatal for one chart; the caller reports it and moves on to the next chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart structure: {0}")]
    Structure(#[from] StructureError),
    #[error("cannot calibrate {axis}: need at least 2 distinct labels, found {found}")]
    Calibration { axis: Axis, found: usize },
}

/// The document does not look like a supported single-series line chart.
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("malformed markup: {0}")]
    Markup(String),
    #[error("series group with class '{0}' not found")]
    MissingSeriesGroup(String),
    #[error("series path with class '{0}' not found")]
    MissingSeriesPath(String),
    #[error("series path has no 'd' attribute")]
    MissingPathData,
    #[error("malformed path data: {0}")]
    PathData(String),
}

impl From<roxmltree::Error> for StructureError {
    fn from(e: roxmltree::Error) -> Self {
        StructureError::Markup(e.to_string())
    }
}

impl From<roxmltree::Error> for ChartError {
    fn from(e: roxmltree::Error) -> Self {
        ChartError::Structure(e.into())
    }
}

/// A single vertex could not be mapped; absorbed by the reconstructor.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PointDrop {
    #[error("non-finite pixel coordinate {0}")]
    NonFiniteInput(f64),
    #[error("calibration produced a non-finite value")]
    NonFiniteOutput,
    #[error("year value {0} outside the supported calendar range")]
    DateOutOfRange(f64),
}
