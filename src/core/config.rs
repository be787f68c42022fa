use crate::core::errors::{Result, SampleError};

/// Configuration for the encode → order → sample pipeline.
///
/// All three parameters are global to a run: every record in the series file
/// shares the same length, segmentation, and symbol alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Samples per series (L). Every record in the file has this length.
    pub series_len: usize,
    /// PAA segment count (P). Must evenly divide `series_len`.
    pub segments: usize,
    /// Bits per SAX symbol (C). Alphabet size is `2^cardinality`.
    /// Symbols are stored in `u8`, so at most 8.
    pub cardinality: u8,
}

impl SamplerConfig {
    pub fn new(series_len: usize, segments: usize, cardinality: u8) -> Self {
        Self {
            series_len,
            segments,
            cardinality,
        }
    }

    /// Defaults matching the reference tooling: 8-bit symbols, 16 segments.
    pub fn default_for(series_len: usize) -> Self {
        Self::new(series_len, 16, 8)
    }

    /// Samples per PAA segment.
    pub fn segment_len(&self) -> usize {
        self.series_len / self.segments
    }

    /// SAX alphabet size, `2^cardinality`.
    pub fn alphabet_size(&self) -> usize {
        1usize << self.cardinality
    }

    /// Bytes of one record on disk (`L` single-precision floats).
    pub fn record_bytes(&self) -> u64 {
        self.series_len as u64 * std::mem::size_of::<f32>() as u64
    }

    /// Check the structural invariants before any I/O happens.
    pub fn validate(&self) -> Result<()> {
        if self.series_len == 0 || self.segments == 0 {
            return Err(SampleError::Config(format!(
                "series length ({}) and segment count ({}) must be positive",
                self.series_len, self.segments
            )));
        }
        if self.series_len % self.segments != 0 {
            return Err(SampleError::Config(format!(
                "segment count {} does not evenly divide series length {}",
                self.segments, self.series_len
            )));
        }
        if self.cardinality == 0 || self.cardinality > 8 {
            return Err(SampleError::Config(format!(
                "cardinality must be in 1..=8, got {}",
                self.cardinality
            )));
        }
        Ok(())
    }
}
