// File: crates/recover-core/src/types.rs
// Summary: Shared value types flowing through parse -> calibrate -> reconstruct.

use chrono::NaiveDate;
use std::fmt;

/// Pixel coordinate of one data-path vertex, in document order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Calibration point read from an axis tick label.
/// Contract: `pixel` and `value` are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLabel {
    pub pixel: f64,
    pub value: f64,
}

impl AxisLabel {
    pub const fn new(pixel: f64, value: f64) -> Self {
        Self { pixel, value }
    }
}

/// Which chart axis a label set or calibration belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal category axis (years).
    Category,
    /// Vertical value axis (prices).
    Value,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Category => f.write_str("category (x) axis"),
            Axis::Value => f.write_str("value (y) axis"),
        }
    }
}

/// Translation applied to the series drawing group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One recovered point of the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: f64,
}

/// Ordered samples for one chart, one per calibratable vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesResult {
    pub samples: Vec<Sample>,
    /// Vertices that could not be mapped and were left out.
    pub dropped: usize,
}

impl SeriesResult {
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Value range over all samples, `None` when empty.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut it = self.samples.iter();
        let first = it.next()?;
        Some(it.fold((first.value, first.value), |(lo, hi), s| (lo.min(s.value), hi.max(s.value))))
    }
}
