use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use tracing::debug;

use crate::core::config::SamplerConfig;
use crate::core::errors::{Result, SampleError};
use crate::core::record::IndexedRecord;
use crate::sax::breakpoints::BreakpointTable;
use crate::sax::{encode, invert, paa};

/// Per-record encode scratch: one series buffer, one PAA vector, one SAX word.
///
/// Reused across every record so a scan allocates nothing per record beyond
/// the `P`-byte ordering key it keeps.
pub struct KeyEncoder {
    config: SamplerConfig,
    table: BreakpointTable,
    series: Vec<f32>,
    paa: Vec<f64>,
    word: Vec<u8>,
}

impl KeyEncoder {
    /// The table's alphabet must match the configured cardinality.
    pub fn new(config: SamplerConfig, table: BreakpointTable) -> Result<Self> {
        config.validate()?;
        if table.alphabet_size() != config.alphabet_size() {
            return Err(SampleError::Config(format!(
                "breakpoint table delimits {} symbols but cardinality {} needs {}",
                table.alphabet_size(),
                config.cardinality,
                config.alphabet_size()
            )));
        }
        Ok(Self {
            series: vec![0.0; config.series_len],
            paa: vec![0.0; config.segments],
            word: vec![0; config.segments],
            config,
            table,
        })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Encode one series into a fresh `P`-byte ordering key.
    ///
    /// Length mismatches report record `-1`: the series did not come from a
    /// file scan, so it has no file position.
    pub fn encode_key(&mut self, series: &[f32]) -> Result<Box<[u8]>> {
        if series.len() != self.config.series_len {
            return Err(SampleError::Encoding {
                record: -1,
                reason: format!(
                    "series has {} samples, expected {}",
                    series.len(),
                    self.config.series_len
                ),
            });
        }
        let mut key = vec![0u8; self.config.segments].into_boxed_slice();
        paa::paa_into(series, &mut self.paa);
        encode::encode_word(&self.paa, &self.table, &mut self.word);
        invert::invert_sax(&self.word, self.config.cardinality, &mut key);
        Ok(key)
    }

    /// Read and encode the next record from an open reader.
    fn encode_next(&mut self, reader: &mut impl ReadBytesExt) -> Result<Box<[u8]>> {
        reader.read_f32_into::<LittleEndian>(&mut self.series)?;
        let mut key = vec![0u8; self.config.segments].into_boxed_slice();
        paa::paa_into(&self.series, &mut self.paa);
        encode::encode_word(&self.paa, &self.table, &mut self.word);
        invert::invert_sax(&self.word, self.config.cardinality, &mut key);
        Ok(key)
    }
}

/// Stream the series file record-by-record, producing one
/// `(original index, ordering key)` pair per record.
///
/// Raw samples are discarded as soon as each key is built, so memory stays
/// `O(record_count × P)` rather than `O(record_count × L)`. The file length
/// is checked up front: fewer on-disk records than requested is fatal before
/// anything is read.
pub fn scan_database(
    path: &Path,
    record_count: u64,
    encoder: &mut KeyEncoder,
) -> Result<Vec<IndexedRecord>> {
    let file = File::open(path).map_err(|source| SampleError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let available = file.metadata()?.len() / encoder.config.record_bytes();
    if available < record_count {
        return Err(SampleError::InsufficientData {
            path: path.to_path_buf(),
            available,
            requested: record_count,
        });
    }
    debug!(records = record_count, available, "scanning series file");

    let mut records = Vec::new();
    records
        .try_reserve_exact(record_count as usize)
        .map_err(|source| SampleError::Allocation {
            records: record_count,
            source,
        })?;

    let mut reader = BufReader::new(file);
    for index in 0..record_count as i64 {
        let key = encoder.encode_next(&mut reader)?;
        records.push(IndexedRecord::new(index, key));
    }
    Ok(records)
}
