// File: crates/recover-core/src/table.rs
// Summary: Combined {Date, Price, Series} table over several recovered series, with CSV output.

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::types::SeriesResult;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

/// One row of the combined table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Series")]
    pub series: String,
}

/// Rows of every series, concatenated in the order series were added.
#[derive(Clone, Debug, Default)]
pub struct SeriesTable {
    rows: Vec<SeriesRow>,
    names: Vec<String>,
}

impl SeriesTable {
    pub fn new() -> Self { Self::default() }

    /// Append `result` tagged with `name`; sample order is kept.
    pub fn push_series(&mut self, name: impl Into<String>, result: &SeriesResult) {
        let name = name.into();
        self.rows.extend(result.samples.iter().map(|s| SeriesRow { date: s.date, price: s.value, series: name.clone() }));
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn rows(&self) -> &[SeriesRow] { &self.rows }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Series names in insertion order.
    pub fn series_names(&self) -> &[String] { &self.names }

    /// Rows belonging to one series.
    pub fn series_rows<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SeriesRow> + 'a {
        self.rows.iter().filter(move |r| r.series == name)
    }

    /// Earliest and latest date over all rows.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|r| r.date).min()?;
        let max = self.rows.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// Write the table as CSV with a `Date,Price,Series` header.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), TableError> {
        let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
        if self.rows.is_empty() {
            wtr.write_record(["Date", "Price", "Series"])?;
        }
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}
