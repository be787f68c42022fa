use crate::core::errors::{Result, SampleError};

fn check_count(name: &str, count: usize, n: usize) -> Result<()> {
    if count == 0 || count > n {
        return Err(SampleError::Config(format!(
            "{name} count {count} must be in 1..={n}"
        )));
    }
    Ok(())
}

/// Positions of the train picks over a sorted domain of length `n`:
/// `0, step, 2·step, …` for `train_count` entries, `step = n / train_count`.
///
/// Integer-division stride: the picks stay in `[0, n)` and are evenly spread
/// over the shape-ordered domain.
pub fn train_positions(n: usize, train_count: usize) -> Result<impl Iterator<Item = usize>> {
    check_count("train", train_count, n)?;
    let step = n / train_count;
    Ok((0..train_count).map(move |i| i * step))
}

/// Positions of the validation picks: `offset, offset + step, …` for
/// `val_count` entries, `step = n / val_count`, starting one-third of a
/// *train* stride into the domain — `offset = (n / train_count) / 3`.
///
/// The offset de-correlates validation picks from train picks while keeping
/// both evenly spread. Neither walk removes picks from a pool, so train and
/// validation may overlap in original indices; that overlap is documented
/// behavior, not a defect (with `n = 10` and both counts 5 the two sets are
/// identical). Offsetting can push the final pick past the domain when the
/// train stride is much larger than the validation stride; that is rejected
/// here as a configuration error rather than read out of bounds.
pub fn validation_positions(
    n: usize,
    train_count: usize,
    val_count: usize,
) -> Result<impl Iterator<Item = usize>> {
    check_count("train", train_count, n)?;
    check_count("validation", val_count, n)?;
    let offset = (n / train_count) / 3;
    let step = n / val_count;
    let last = offset + (val_count - 1) * step;
    if last >= n {
        return Err(SampleError::Config(format!(
            "validation walk (offset {offset}, step {step}) ends at {last}, \
             past the {n} sorted records"
        )));
    }
    Ok((0..val_count).map(move |i| offset + i * step))
}
