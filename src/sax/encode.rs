use crate::sax::breakpoints::BreakpointTable;

/// Map one segment average to its SAX symbol.
///
/// Binary search (`partition_point`, equivalent to `numpy.searchsorted`) for
/// the unique rank `k >= 1` with `cutoff[k-1] < value <= cutoff[k]`. Values
/// that match no interior interval fall back on the sign of the average:
/// non-positive averages get symbol `0`, positive averages get the top
/// symbol `A - 1`.
///
/// The asymmetric fallback is deliberate and must not be "fixed": with
/// cutoff tables that straddle zero it only fires for genuinely out-of-range
/// values, and it governs how extreme averages pile up in the two end
/// symbols.
pub fn symbol(value: f64, table: &BreakpointTable) -> u8 {
    let cutoffs = table.cutoffs();
    // Number of cutoffs strictly below `value`.
    let rank = cutoffs.partition_point(|&b| b < value);
    if rank >= 1 && rank < cutoffs.len() {
        rank as u8
    } else if value > 0.0 {
        (table.alphabet_size() - 1) as u8
    } else {
        0
    }
}

/// Encode a full PAA vector into a SAX word, one symbol per segment.
pub fn encode_word(paa: &[f64], table: &BreakpointTable, word: &mut [u8]) {
    assert_eq!(paa.len(), word.len(), "one symbol per segment");
    for (avg, sym) in paa.iter().zip(word.iter_mut()) {
        *sym = symbol(*avg, table);
    }
}
