// File: crates/recover-core/src/pipeline.rs
// Summary: One-chart extraction: parse -> calibrate both axes -> reconstruct.

use tracing::debug;

use crate::calibrate::CalibrationFunction;
use crate::error::ChartError;
use crate::layout::ChartLayout;
use crate::reconstruct::reconstruct;
use crate::svg::VectorImage;
use crate::types::{Axis, SeriesResult};

/// Recover the series drawn in `image`. Either both axes calibrate and a
/// complete result is returned, or the chart fails as a whole.
pub fn extract_series(image: &VectorImage<'_>, layout: &ChartLayout) -> Result<SeriesResult, ChartError> {
    let parsed = image.parse(layout)?;
    let x_calib = CalibrationFunction::build(Axis::Category, &parsed.x_labels)?;
    let y_calib = CalibrationFunction::build(Axis::Value, &parsed.y_labels)?;
    for calib in [&x_calib, &y_calib] {
        let (lo, hi) = calib.pixel_range();
        debug!(axis = %calib.axis(), points = calib.points().len(), lo, hi, "axis calibrated");
    }

    let result = reconstruct(&parsed.vertices, &x_calib, &y_calib, parsed.offset);
    debug!(samples = result.len(), dropped = result.dropped, "series reconstructed");
    Ok(result)
}

/// [`extract_series`] over raw SVG markup.
pub fn extract_from_str(markup: &str, layout: &ChartLayout) -> Result<SeriesResult, ChartError> {
    let image = VectorImage::read(markup)?;
    extract_series(&image, layout)
}
