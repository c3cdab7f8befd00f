// File: crates/recover-core/src/source.rs
// Summary: Acquisition seam; where chart markup comes from before the core sees it.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// No chart was delivered for an identifier; the core never runs for it.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("no chart available for '{id}' at {path}")]
    NotFound { id: String, path: PathBuf },
    #[error("reading chart for '{id}' from {path}")]
    Io {
        id: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Producer of chart markup by identifier (e.g. a commodity name).
pub trait ChartSource {
    fn fetch_chart(&self, source_id: &str) -> Result<String, AcquisitionError>;
}

/// Charts previously exported as `<root>/<id>.svg`.
/// The workspace directory is explicit; files are only read.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn chart_path(&self, source_id: &str) -> PathBuf {
        self.root.join(format!("{source_id}.svg"))
    }
}

impl ChartSource for DirectorySource {
    fn fetch_chart(&self, source_id: &str) -> Result<String, AcquisitionError> {
        let path = self.chart_path(source_id);
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AcquisitionError::NotFound { id: source_id.to_string(), path }
            } else {
                AcquisitionError::Io { id: source_id.to_string(), path, source }
            }
        })
    }
}
