// File: crates/recover-plot/tests/smoke.rs
// Purpose: Panel plot renders one panel per series and writes a decodable PNG.

use chart_recover_core::{Sample, SeriesResult, SeriesTable};
use chart_recover_plot::{render_table_to_png, render_table_to_png_bytes, render_table_to_rgba8, PlotOptions, RenderError, Theme};
use chrono::NaiveDate;

fn series(points: &[(i32, u32, f64)]) -> SeriesResult {
    SeriesResult {
        samples: points
            .iter()
            .map(|&(y, m, v)| Sample { date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(), value: v })
            .collect(),
        dropped: 0,
    }
}

fn table() -> SeriesTable {
    let mut t = SeriesTable::new();
    t.push_series("lithium", &series(&[(2019, 1, 10.0), (2020, 6, 35.0), (2022, 11, 80.0)]));
    t.push_series("cobalt", &series(&[(2018, 3, 70.0), (2021, 2, 50.0)]));
    t.push_series("lead", &series(&[(2020, 1, 2.0)]));
    t
}

#[test]
fn figure_width_scales_with_series() {
    let mut opts = PlotOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h) = render_table_to_rgba8(&table(), &opts).expect("rgba render");
    assert_eq!(w as i32, opts.panel_width * 3);
    assert_eq!(h as i32, opts.height);
    assert_eq!(px.len(), w as usize * h as usize * 4);
    // opaque background in the top-left corner
    assert_eq!(px[3], 255);
}

#[test]
fn png_bytes_decode_to_figure_size() {
    let opts = PlotOptions { theme: Theme::dark(), draw_labels: false, ..PlotOptions::default() };
    let bytes = render_table_to_png_bytes(&table(), &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.width() as i32, opts.panel_width * 3);
}

#[test]
fn writes_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plots/prices.png");
    render_table_to_png(&table(), &PlotOptions::default(), &out).expect("render to file");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn empty_table_is_an_error() {
    let err = render_table_to_rgba8(&SeriesTable::new(), &PlotOptions::default()).unwrap_err();
    assert!(matches!(err, RenderError::EmptyTable));
}
