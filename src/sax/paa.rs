/// Piecewise Aggregate Approximation: reduce a series to segment-wise means.
///
/// Splits `series` into `out.len()` contiguous, non-overlapping slices of
/// equal length and writes the arithmetic mean of each into `out`. Sums are
/// accumulated in `f64` regardless of the `f32` storage format.
///
/// The series length must be an exact multiple of the segment count; the
/// pipeline config validates this before any record is read.
pub fn paa_into(series: &[f32], out: &mut [f64]) {
    let segments = out.len();
    assert!(segments > 0, "need at least one segment");
    assert!(
        series.len() % segments == 0,
        "series length {} not divisible by segment count {segments}",
        series.len()
    );
    let seg_len = series.len() / segments;
    let inv_len = 1.0 / seg_len as f64;

    for (i, avg) in out.iter_mut().enumerate() {
        let slice = &series[i * seg_len..(i + 1) * seg_len];
        *avg = slice.iter().map(|&x| x as f64).sum::<f64>() * inv_len;
    }
}
