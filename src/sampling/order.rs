use crate::core::record::IndexedRecord;

/// Sorts indexed records by ordering key.
///
/// Bound to the run's segment count at construction so the comparison is a
/// configured operation, not a free function peeking at ambient state: it
/// compares exactly `segments` key bytes, unsigned, most-significant segment
/// byte first.
///
/// The sort is deliberately unstable. Ties only arise for bytewise-identical
/// keys, and none of the outputs depends on tie order, so there is no reason
/// to pay stability's memory cost.
#[derive(Debug, Clone, Copy)]
pub struct Orderer {
    segments: usize,
}

impl Orderer {
    pub fn new(segments: usize) -> Self {
        Self { segments }
    }

    /// Sort in place into byte-lexicographic key order.
    ///
    /// This is a full comparison sort: the stride sampler needs evenly-spaced
    /// access into the complete sorted domain, so partial or approximate
    /// ordering is not acceptable.
    pub fn sort(&self, records: &mut [IndexedRecord]) {
        let p = self.segments;
        debug_assert!(records.iter().all(|r| r.key.len() == p));
        records.sort_unstable_by(|a, b| a.key[..p].cmp(&b.key[..p]));
    }
}
