// File: crates/recover-core/src/calibrate.rs
// Summary: Axis calibration; piecewise-linear pixel -> value mapping with linear extrapolation.

use crate::error::{ChartError, PointDrop};
use crate::types::{Axis, AxisLabel};

/// Pixel-to-value mapping fitted to one axis' tick labels.
/// Contract: at least two points, strictly increasing in pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationFunction {
    axis: Axis,
    points: Vec<AxisLabel>,
}

impl CalibrationFunction {
    /// Fit a mapping to `labels`. Order does not matter; repeated pixel
    /// positions keep the first label seen. Non-finite labels are ignored.
    pub fn build(axis: Axis, labels: &[AxisLabel]) -> Result<Self, ChartError> {
        let mut points: Vec<AxisLabel> = labels
            .iter()
            .copied()
            .filter(|l| l.pixel.is_finite() && l.value.is_finite())
            .collect();
        // stable: equal pixels stay in input order so dedup keeps the first
        points.sort_by(|a, b| a.pixel.total_cmp(&b.pixel));
        points.dedup_by(|later, earlier| later.pixel == earlier.pixel);

        if points.len() < 2 {
            return Err(ChartError::Calibration { axis, found: points.len() });
        }
        Ok(Self { axis, points })
    }

    pub fn axis(&self) -> Axis { self.axis }

    /// Calibration points, sorted by pixel.
    pub fn points(&self) -> &[AxisLabel] { &self.points }

    /// Pixel span covered by the labels.
    pub fn pixel_range(&self) -> (f64, f64) {
        (self.points[0].pixel, self.points[self.points.len() - 1].pixel)
    }

    /// Map a raw pixel to a value. `offset` is added to the pixel first.
    ///
    /// Inside the labelled span the two bracketing points are interpolated;
    /// outside it the first or last segment is extended.
    pub fn evaluate(&self, pixel: f64, offset: f64) -> Result<f64, PointDrop> {
        let p = pixel + offset;
        if !p.is_finite() {
            return Err(PointDrop::NonFiniteInput(p));
        }

        let n = self.points.len();
        // index of the first point strictly right of p, clamped to a valid segment
        let upper = self.points.partition_point(|l| l.pixel <= p).clamp(1, n - 1);
        let a = self.points[upper - 1];
        let b = self.points[upper];

        let t = (p - a.pixel) / (b.pixel - a.pixel);
        let v = a.value + t * (b.value - a.value);
        if v.is_finite() { Ok(v) } else { Err(PointDrop::NonFiniteOutput) }
    }
}
