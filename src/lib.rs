pub mod core;
pub mod sampling;
pub mod sax;

pub use crate::core::config::SamplerConfig;
pub use crate::core::errors::{Result, SampleError};
pub use crate::core::record::IndexedRecord;
pub use crate::sampling::order::Orderer;
pub use crate::sampling::pipeline::{SamplePlan, SampleSummary};
pub use crate::sampling::scan::KeyEncoder;
pub use crate::sax::breakpoints::BreakpointTable;

/// High-level facade over the encode → order → sample pipeline.
///
/// Owns the configuration, the breakpoint table, and the per-record scratch
/// buffers; nothing is shared across runs, and a fresh run owns a fresh
/// record array.
///
/// # Examples
///
/// ```
/// use saxsample::{SamplerConfig, ShapeSampler};
///
/// let mut sampler = ShapeSampler::new(SamplerConfig::new(8, 4, 2)).unwrap();
/// let key = sampler
///     .encode_key(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0])
///     .unwrap();
/// assert_eq!(key.len(), 4); // one byte per PAA segment
/// ```
pub struct ShapeSampler {
    encoder: KeyEncoder,
}

impl ShapeSampler {
    /// Build a sampler with standard-normal breakpoints for the configured
    /// cardinality (the usual choice for z-normalized series).
    pub fn new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        let table = BreakpointTable::normal(config.cardinality);
        Self::with_breakpoints(config, table)
    }

    /// Build a sampler with an explicit breakpoint table.
    pub fn with_breakpoints(config: SamplerConfig, table: BreakpointTable) -> Result<Self> {
        Ok(Self {
            encoder: KeyEncoder::new(config, table)?,
        })
    }

    pub fn config(&self) -> &SamplerConfig {
        self.encoder.config()
    }

    /// Encode one series into its inverted-SAX ordering key.
    pub fn encode_key(&mut self, series: &[f32]) -> Result<Box<[u8]>> {
        self.encoder.encode_key(series)
    }

    /// Run the full pipeline: scan, encode, sort, and write every output the
    /// plan requests.
    pub fn run(&mut self, plan: &SamplePlan) -> Result<SampleSummary> {
        sampling::pipeline::run(plan, &mut self.encoder)
    }
}

/// Single-integer entry point: run a plan and fold the outcome into a status
/// code. Zero is full success; each non-zero code identifies one failure
/// class (see [`SampleError::status_code`]).
pub fn run_to_status(config: SamplerConfig, plan: &SamplePlan) -> i32 {
    let result = ShapeSampler::new(config).and_then(|mut sampler| sampler.run(plan));
    match result {
        Ok(_) => 0,
        Err(err) => {
            tracing::error!(%err, code = err.status_code(), "sampling run failed");
            err.status_code()
        }
    }
}
