// File: crates/recover-core/src/lib.rs
// Summary: Core library entry point; exports the chart recovery pipeline and its consumers.

pub mod types;
pub mod error;
pub mod layout;
pub mod path;
pub mod svg;
pub mod calibrate;
pub mod reconstruct;
pub mod pipeline;
pub mod source;
pub mod table;
pub mod batch;

pub use types::{Axis, AxisLabel, Offset, Sample, SeriesResult, Vertex};
pub use error::{ChartError, PointDrop, StructureError};
pub use layout::ChartLayout;
pub use svg::{ParsedChart, VectorImage};
pub use calibrate::CalibrationFunction;
pub use reconstruct::{fractional_year_to_date, reconstruct};
pub use pipeline::{extract_from_str, extract_series};
pub use source::{AcquisitionError, ChartSource, DirectorySource};
pub use table::{SeriesRow, SeriesTable, TableError};
pub use batch::{process_batch, BatchError, BatchReport, ChartFailure};
