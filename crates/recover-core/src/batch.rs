// File: crates/recover-core/src/batch.rs
// Summary: Batch driver; acquires and extracts several charts, isolating per-chart failures.

use thiserror::Error;
use tracing::{info, warn};

use crate::error::ChartError;
use crate::layout::ChartLayout;
use crate::pipeline::extract_from_str;
use crate::source::{AcquisitionError, ChartSource};
use crate::table::SeriesTable;

/// Why one identifier produced nothing.
#[derive(Debug, Error)]
pub enum ChartFailure {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("chart produced no samples")]
    Empty,
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no chart produced any samples ({} failed)", .failures.len())]
    NothingRecovered { failures: Vec<(String, ChartFailure)> },
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub table: SeriesTable,
    pub failures: Vec<(String, ChartFailure)>,
    /// Vertices dropped across all successful charts.
    pub dropped: usize,
}

/// Process every identifier independently. A failing chart is logged as
/// `failed to process <id>` and left out; the batch succeeds when at least
/// one chart produced a non-empty series.
pub fn process_batch<S, I>(source: &S, ids: I, layout: &ChartLayout) -> Result<BatchReport, BatchError>
where
    S: ChartSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = BatchReport::default();

    for id in ids {
        let id = id.as_ref();
        let outcome = source
            .fetch_chart(id)
            .map_err(ChartFailure::from)
            .and_then(|markup| extract_from_str(&markup, layout).map_err(ChartFailure::from))
            .and_then(|result| if result.is_empty() { Err(ChartFailure::Empty) } else { Ok(result) });

        match outcome {
            Ok(result) => {
                info!(series = id, samples = result.len(), dropped = result.dropped, "chart recovered");
                report.dropped += result.dropped;
                report.table.push_series(id, &result);
            }
            Err(e) => {
                warn!(series = id, error = %e, "failed to process {id}");
                report.failures.push((id.to_string(), e));
            }
        }
    }

    if report.table.is_empty() {
        return Err(BatchError::NothingRecovered { failures: report.failures });
    }
    Ok(report)
}
