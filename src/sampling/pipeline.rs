use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};
use tracing::{debug, info};

use crate::core::errors::{Result, SampleError};
use crate::sampling::order::Orderer;
use crate::sampling::scan::{scan_database, KeyEncoder};
use crate::sampling::stride::{train_positions, validation_positions};

/// One pipeline run: the series file to order plus the index files to emit.
///
/// Every output is optional; an omitted output's file is never opened. The
/// train count participates in the validation offset even when no train file
/// is written, so it must be set whenever validation output is requested.
#[derive(Debug, Clone)]
pub struct SamplePlan {
    /// Flat binary file of `record_count` records, each `series_len` LE f32s.
    pub series_path: PathBuf,
    /// Records to process from the head of the file.
    pub record_count: u64,
    /// Destination for all original indices in shape order.
    pub sorted_path: Option<PathBuf>,
    /// Destination for the train stride walk.
    pub train_path: Option<PathBuf>,
    pub train_count: usize,
    /// Destination for the validation stride walk.
    pub val_path: Option<PathBuf>,
    pub val_count: usize,
}

impl SamplePlan {
    pub fn new(series_path: impl Into<PathBuf>, record_count: u64) -> Self {
        Self {
            series_path: series_path.into(),
            record_count,
            sorted_path: None,
            train_path: None,
            train_count: 0,
            val_path: None,
            val_count: 0,
        }
    }

    pub fn with_sorted(mut self, path: impl Into<PathBuf>) -> Self {
        self.sorted_path = Some(path.into());
        self
    }

    pub fn with_train(mut self, path: impl Into<PathBuf>, count: usize) -> Self {
        self.train_path = Some(path.into());
        self.train_count = count;
        self
    }

    pub fn with_validation(mut self, path: impl Into<PathBuf>, count: usize) -> Self {
        self.val_path = Some(path.into());
        self.val_count = count;
        self
    }
}

/// What a completed run wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSummary {
    /// Records scanned, encoded, and sorted.
    pub records: u64,
    /// Indices written to the sorted output, if requested.
    pub sorted_written: Option<usize>,
    /// Indices written to the train output, if requested.
    pub train_written: Option<usize>,
    /// Indices written to the validation output, if requested.
    pub val_written: Option<usize>,
}

fn write_indices(path: &Path, indices: impl Iterator<Item = i64>) -> Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0;
    for index in indices {
        writer.write_i64::<LittleEndian>(index)?;
        written += 1;
    }
    writer.into_inner().map_err(|e| e.into_error())?;
    Ok(written)
}

/// Run the whole encode → order → sample pipeline in one sequential pass.
///
/// Phases: validate the plan (before any I/O), scan + encode the series file
/// into `(index, key)` pairs, sort by key, then write each requested output.
/// Any failure aborts the run; scoped buffers and handles are released on the
/// way out, and no further output is written after the failing one.
pub fn run(plan: &SamplePlan, encoder: &mut KeyEncoder) -> Result<SampleSummary> {
    if plan.record_count == 0 {
        return Err(SampleError::Config(
            "record count must be positive".into(),
        ));
    }
    let n = plan.record_count as usize;

    // Fail on bad counts and stride overruns before touching the file.
    if plan.train_path.is_some() {
        train_positions(n, plan.train_count)?;
    }
    if plan.val_path.is_some() {
        validation_positions(n, plan.train_count, plan.val_count)?;
    }

    let config = *encoder.config();
    info!(
        path = %plan.series_path.display(),
        records = plan.record_count,
        series_len = config.series_len,
        segments = config.segments,
        cardinality = config.cardinality,
        "starting shape-ordered sampling"
    );

    let mut records = scan_database(&plan.series_path, plan.record_count, encoder)?;
    debug!(records = records.len(), "encoded, sorting by inverted-SAX key");
    Orderer::new(config.segments).sort(&mut records);

    let mut summary = SampleSummary {
        records: plan.record_count,
        sorted_written: None,
        train_written: None,
        val_written: None,
    };

    if let Some(path) = &plan.sorted_path {
        let written = write_indices(path, records.iter().map(|r| r.index))?;
        debug!(path = %path.display(), written, "wrote sorted indices");
        summary.sorted_written = Some(written);
    }

    if let Some(path) = &plan.train_path {
        let positions = train_positions(n, plan.train_count)?;
        let written = write_indices(path, positions.map(|p| records[p].index))?;
        debug!(path = %path.display(), written, "wrote train indices");
        summary.train_written = Some(written);
    }

    if let Some(path) = &plan.val_path {
        let positions = validation_positions(n, plan.train_count, plan.val_count)?;
        let written = write_indices(path, positions.map(|p| records[p].index))?;
        debug!(path = %path.display(), written, "wrote validation indices");
        summary.val_written = Some(written);
    }

    info!(records = summary.records, "sampling complete");
    Ok(summary)
}
