/// One database record after encoding: its original file position paired with
/// the inverted-SAX ordering key.
///
/// This is the only structure that scales with the dataset: `P` key bytes plus
/// one `i64` per record, `O(N × P)` total. The raw series it was derived from
/// is discarded as soon as the key is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    /// 0-based position of the record in the series file.
    pub index: i64,
    /// Packed inverted-SAX key, one byte per PAA segment.
    pub key: Box<[u8]>,
}

impl IndexedRecord {
    pub fn new(index: i64, key: Box<[u8]>) -> Self {
        Self { index, key }
    }
}
