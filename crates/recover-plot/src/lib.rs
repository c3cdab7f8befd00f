// File: crates/recover-plot/src/lib.rs
// Summary: Plot crate entry point; renders a recovered-series table to PNG.

pub mod types;
pub mod grid;
pub mod theme;
pub mod panels;

pub use panels::{render_table_to_png, render_table_to_png_bytes, render_table_to_rgba8, PlotOptions, RenderError};
pub use theme::Theme;
pub use types::Insets;
