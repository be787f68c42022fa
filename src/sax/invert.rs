/// Inverted-SAX transform: bit-interleave a SAX word into an ordering key.
///
/// Walks bit level `i` from `cardinality - 1` down to `0` and, within each
/// level, segments `j = 0..P` in order, appending bit `i` of `word[j]` to a
/// bitstream. Every `cardinality` accumulated bits close one output byte,
/// filled most-significant-position-first within the low `cardinality` bits.
/// With `P` segments of `cardinality` bits each, the stream packs back into
/// exactly `P` output bytes.
///
/// The result is a Z-order-style key: byte-lexicographic comparison weighs
/// the top bit of every segment before any lower bit, so ordering clusters
/// records whose shapes are close across all segments jointly instead of
/// being dominated by the first segment alone.
///
/// The transform permutes bits, so it is a bijection on SAX words of a fixed
/// `(P, cardinality)` shape — distinct words always get distinct keys.
pub fn invert_sax(word: &[u8], cardinality: u8, key: &mut [u8]) {
    let segments = word.len();
    assert_eq!(key.len(), segments, "key is one byte per segment");
    assert!(
        (1..=8).contains(&cardinality),
        "cardinality must be in 1..=8"
    );

    key.fill(0);

    let mut out_byte = 0usize;
    let mut out_bit = i32::from(cardinality) - 1;

    for level in (0..i32::from(cardinality)).rev() {
        for &sym in word {
            let bit = (sym >> level) & 1;
            key[out_byte] |= bit << out_bit;

            out_bit -= 1;
            if out_bit < 0 {
                out_byte += 1;
                out_bit = i32::from(cardinality) - 1;
            }
        }
    }
}
