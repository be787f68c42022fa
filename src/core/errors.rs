use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the sampling pipeline.
///
/// Each variant corresponds to exactly one failure class and one stable
/// status code (see [`SampleError::status_code`]). The pipeline has no
/// partial-success mode: any error aborts the run, and because every buffer
/// and file handle is scoped to the run, an early return releases them all.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Invalid pipeline parameters, detected before any I/O where possible.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The series file could not be opened for reading.
    #[error("cannot open series file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The series file holds fewer records than requested.
    #[error(
        "series file {} holds {available} records, {requested} requested",
        path.display()
    )]
    InsufficientData {
        path: PathBuf,
        available: u64,
        requested: u64,
    },

    /// Allocation of the collection-wide ordering-key array failed.
    #[error("cannot allocate ordering keys for {records} records: {source}")]
    Allocation {
        records: u64,
        #[source]
        source: TryReserveError,
    },

    /// A record could not be encoded to a SAX word.
    #[error("record {record}: {reason}")]
    Encoding { record: i64, reason: String },

    /// Any other read or write failure mid-run.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SampleError {
    /// Stable status code for this failure class.
    ///
    /// Zero is reserved for success; see [`crate::run_to_status`].
    pub fn status_code(&self) -> i32 {
        match self {
            SampleError::Config(_) => 1,
            SampleError::Open { .. } => 2,
            SampleError::InsufficientData { .. } => 3,
            SampleError::Allocation { .. } => 4,
            SampleError::Encoding { .. } => 5,
            SampleError::Io(_) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
