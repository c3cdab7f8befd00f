// File: crates/recover-plot/src/grid.rs
// Summary: Tick layout helpers for the value and date axes.

use chrono::{Datelike, NaiveDate};

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// January 1 of every year strictly inside `(from, to]`, thinned to at most `max_ticks`.
pub fn year_ticks(from: NaiveDate, to: NaiveDate, max_ticks: usize) -> Vec<NaiveDate> {
    let years: Vec<NaiveDate> = ((from.year() + 1)..=to.year())
        .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .collect();
    if max_ticks == 0 || years.len() <= max_ticks {
        return years;
    }
    let stride = years.len().div_ceil(max_ticks);
    years.into_iter().step_by(stride).collect()
}

/// Padded value range; flat series get a unit span.
pub fn padded_range(lo: f64, hi: f64, pad_frac: f64) -> (f64, f64) {
    let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
    let m = (hi - lo) * pad_frac;
    (lo - m, hi + m)
}
