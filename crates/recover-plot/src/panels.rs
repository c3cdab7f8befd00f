// File: crates/recover-plot/src/panels.rs
// Summary: Side-by-side line panels (one per series) sharing the date axis, rendered on a Skia raster surface.

use std::io::Cursor;
use std::path::Path;

use chart_recover_core::{SeriesRow, SeriesTable};
use chrono::NaiveDate;
use skia_safe as skia;
use thiserror::Error;
use tracing::debug;

use crate::grid::{linspace, padded_range, year_ticks};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, PANEL_WIDTH};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("nothing to plot")]
    EmptyTable,
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("png encode: {0}")]
    Encode(#[from] image::ImageError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub struct PlotOptions {
    /// Width of each panel; the figure is `panel_width * series` wide.
    pub panel_width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl PlotOptions {
    pub fn figure_size(&self, panels: usize) -> (i32, i32) {
        (self.panel_width * panels.max(1) as i32, self.height)
    }

    /// Plot area of panel `index`, insets removed.
    fn panel_rect(&self, index: usize) -> PanelRect {
        let l = (index as i32 * self.panel_width) as f32 + self.insets.left as f32;
        let t = self.insets.top as f32;
        PanelRect {
            l,
            t,
            r: l + (self.panel_width - self.insets.hsum() as i32) as f32,
            b: t + (self.height - self.insets.vsum() as i32) as f32,
        }
    }
}

/// Plot rect of one panel in figure pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PanelRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

/// Date axis shared by every panel.
#[derive(Clone, Copy, Debug)]
struct DateSpan {
    from: NaiveDate,
    to: NaiveDate,
    days: f64,
}

impl DateSpan {
    fn new(from: NaiveDate, to: NaiveDate) -> Self {
        let days = (to - from).num_days().max(1) as f64;
        Self { from, to, days }
    }
    fn frac(&self, d: NaiveDate) -> f32 {
        ((d - self.from).num_days() as f64 / self.days) as f32
    }
}

/// Render every series of `table` as its own panel, left to right in insertion order.
/// Returns RGBA8 pixels plus width and height.
pub fn render_table_to_rgba8(table: &SeriesTable, opts: &PlotOptions) -> Result<(Vec<u8>, u32, u32), RenderError> {
    let (from, to) = table.date_range().ok_or(RenderError::EmptyTable)?;
    let names = table.series_names();
    let (w, h) = opts.figure_size(names.len());

    let mut surface = skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface(w, h))?;
    let span = DateSpan::new(from, to);
    let fonts = if opts.draw_labels { LabelFonts::load() } else { None };
    {
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        for (i, name) in names.iter().enumerate() {
            let rows: Vec<&SeriesRow> = table.series_rows(name).collect();
            draw_panel(canvas, opts.panel_rect(i), span, name, &rows, opts, fonts.as_ref());
        }
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    debug!(width = w, height = h, panels = names.len(), "plot rendered");
    Ok((pixels, w as u32, h as u32))
}

/// Render to in-memory PNG bytes.
pub fn render_table_to_png_bytes(table: &SeriesTable, opts: &PlotOptions) -> Result<Vec<u8>, RenderError> {
    let (pixels, w, h) = render_table_to_rgba8(table, opts)?;
    let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Render the table to a PNG at `output_png_path`.
pub fn render_table_to_png(
    table: &SeriesTable,
    opts: &PlotOptions,
    output_png_path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let bytes = render_table_to_png_bytes(table, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

/// Tick and title fonts, resolved once per render through the platform font manager.
struct LabelFonts {
    tick: skia::Font,
    title: skia::Font,
}

impl LabelFonts {
    fn load() -> Option<Self> {
        let fm = skia::FontMgr::default();
        let Some(typeface) = fm.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()) else {
            debug!("no default typeface available; drawing without labels");
            return None;
        };
        Some(Self {
            tick: skia::Font::new(typeface.clone(), 11.0f32),
            title: skia::Font::new(typeface, 15.0f32),
        })
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_panel(
    canvas: &skia::Canvas,
    rect: PanelRect,
    span: DateSpan,
    name: &str,
    rows: &[&SeriesRow],
    opts: &PlotOptions,
    fonts: Option<&LabelFonts>,
) {
    let Some((lo, hi)) = rows.iter().map(|r| r.price).fold(None, |acc: Option<(f64, f64)>, p| {
        Some(acc.map_or((p, p), |(lo, hi)| (lo.min(p), hi.max(p))))
    }) else {
        return;
    };
    let (vmin, vmax) = padded_range(lo, hi, 0.02);

    let sx = |d: NaiveDate| -> f32 { rect.l + span.frac(d) * (rect.r - rect.l) };
    let sy = |v: f64| -> f32 { rect.b - ((v - vmin) / (vmax - vmin)) as f32 * (rect.b - rect.t) };

    // Grid: value rows and one column per year boundary
    let grid = stroke_paint(opts.theme.grid, 1.0);
    let value_ticks = linspace(vmin, vmax, 5);
    for &v in &value_ticks {
        canvas.draw_line((rect.l, sy(v)), (rect.r, sy(v)), &grid);
    }
    let date_ticks = year_ticks(span.from, span.to, 6);
    for &d in &date_ticks {
        canvas.draw_line((sx(d), rect.t), (sx(d), rect.b), &grid);
    }

    // Axes
    let axis = stroke_paint(opts.theme.axis_line, 1.5);
    canvas.draw_line((rect.l, rect.b), (rect.r, rect.b), &axis);
    canvas.draw_line((rect.l, rect.t), (rect.l, rect.b), &axis);

    // Series, in recorded order
    let mut path = skia::Path::new();
    let mut it = rows.iter();
    if let Some(first) = it.next() {
        path.move_to((sx(first.date), sy(first.price)));
        for r in it {
            path.line_to((sx(r.date), sy(r.price)));
        }
    }
    canvas.draw_path(&path, &stroke_paint(opts.theme.line_stroke, 2.0));

    if let Some(fonts) = fonts {
        let mut label = skia::Paint::default();
        label.set_anti_alias(true);
        label.set_color(opts.theme.axis_label);

        for &v in &value_ticks {
            canvas.draw_str(format_value(v), (rect.l - 58.0, sy(v) + 4.0), &fonts.tick, &label);
        }
        for &d in &date_ticks {
            canvas.draw_str(d.format("%Y").to_string(), (sx(d) - 14.0, rect.b + 16.0), &fonts.tick, &label);
        }

        let mut title = skia::Paint::default();
        title.set_anti_alias(true);
        title.set_color(opts.theme.title);
        canvas.draw_str(name, (rect.l, rect.t - 14.0), &fonts.title, &title);
    }
}

fn format_value(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{v:.0}")
    } else if v.abs() >= 10.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}
