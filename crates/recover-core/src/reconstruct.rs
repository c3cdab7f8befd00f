// File: crates/recover-core/src/reconstruct.rs
// Summary: Series reconstruction; maps every path vertex to a (date, value) sample.

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::calibrate::CalibrationFunction;
use crate::error::PointDrop;
use crate::types::{Offset, Sample, SeriesResult, Vertex};

/// Days per year used when turning a fractional year into a day offset.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Convert a fractional year (e.g. `2021.38`) to a calendar date.
///
/// The integer part selects the year; the fraction times 365.25 is rounded
/// to the nearest whole day (halves round up) and added to January 1.
pub fn fractional_year_to_date(date_value: f64) -> Result<NaiveDate, PointDrop> {
    if !date_value.is_finite() {
        return Err(PointDrop::NonFiniteOutput);
    }
    let year = date_value.floor();
    if year < f64::from(i32::MIN) || year > f64::from(i32::MAX) {
        return Err(PointDrop::DateOutOfRange(date_value));
    }
    let days = ((date_value - year) * DAYS_PER_YEAR).round() as u64;

    NaiveDate::from_ymd_opt(year as i32, 1, 1)
        .and_then(|jan1| jan1.checked_add_days(Days::new(days)))
        .ok_or(PointDrop::DateOutOfRange(date_value))
}

fn map_vertex(
    v: Vertex,
    x_calib: &CalibrationFunction,
    y_calib: &CalibrationFunction,
    offset: Offset,
) -> Result<Sample, PointDrop> {
    let value = y_calib.evaluate(v.y, offset.y)?;
    let date_value = x_calib.evaluate(v.x, offset.x)?;
    let date = fractional_year_to_date(date_value)?;
    Ok(Sample { date, value })
}

/// Map every vertex through both calibrations, keeping draw order.
///
/// Vertices that cannot be mapped are left out and counted in
/// [`SeriesResult::dropped`]; the output is never sorted or de-duplicated.
pub fn reconstruct(
    vertices: &[Vertex],
    x_calib: &CalibrationFunction,
    y_calib: &CalibrationFunction,
    offset: Offset,
) -> SeriesResult {
    let mut result = SeriesResult { samples: Vec::with_capacity(vertices.len()), dropped: 0 };
    for (index, &v) in vertices.iter().enumerate() {
        match map_vertex(v, x_calib, y_calib, offset) {
            Ok(sample) => result.samples.push(sample),
            Err(reason) => {
                trace!(index, x = v.x, y = v.y, %reason, "vertex dropped");
                result.dropped += 1;
            }
        }
    }
    result
}
