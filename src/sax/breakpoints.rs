use crate::core::errors::{Result, SampleError};

/// Standard normal quantile function (probit / inverse CDF).
///
/// Uses Peter Acklam's rational approximation with relative error < 1.15e-9.
pub(crate) fn norm_ppf(p: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    #[allow(clippy::excessive_precision)]
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    #[allow(clippy::excessive_precision)]
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    #[allow(clippy::excessive_precision)]
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

/// Sorted symbol boundary values for one SAX alphabet.
///
/// An alphabet of size `A` is delimited by `A - 1` cutoffs: symbol `k` covers
/// the interval `(cutoff[k-1], cutoff[k]]`, with sign-based fallbacks at both
/// ends (see [`crate::sax::encode::symbol`]).
///
/// The table is an injected read-only resource rather than process-global
/// state, so tests can substitute synthetic cutoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    cutoffs: Vec<f64>,
}

impl BreakpointTable {
    /// Build the standard-normal quantile table for `cardinality`-bit symbols.
    ///
    /// With `cardinality = 8`, generates `2^8 - 1 = 255` cutoffs from
    /// `norm_ppf(1/256)` to `norm_ppf(255/256)`. Appropriate when the series
    /// are z-normalized, so segment averages are roughly standard normal.
    pub fn normal(cardinality: u8) -> Self {
        assert!(
            (1..=8).contains(&cardinality),
            "cardinality must be in 1..=8"
        );
        let n = 1usize << cardinality;
        let cutoffs = (1..n).map(|i| norm_ppf(i as f64 / n as f64)).collect();
        Self { cutoffs }
    }

    /// Build a table from explicit cutoffs, which must be strictly increasing.
    pub fn from_cutoffs(cutoffs: Vec<f64>) -> Result<Self> {
        if cutoffs.is_empty() {
            return Err(SampleError::Config(
                "breakpoint table needs at least one cutoff".into(),
            ));
        }
        if cutoffs.windows(2).any(|w| w[1] <= w[0]) {
            return Err(SampleError::Config(
                "breakpoint cutoffs must be strictly increasing".into(),
            ));
        }
        Ok(Self { cutoffs })
    }

    pub fn cutoffs(&self) -> &[f64] {
        &self.cutoffs
    }

    /// Alphabet size this table delimits: one more symbol than cutoffs.
    pub fn alphabet_size(&self) -> usize {
        self.cutoffs.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_ppf_symmetry() {
        assert!((norm_ppf(0.5)).abs() < 1e-10);
        for &p in &[0.1, 0.25, 0.4, 0.05, 0.01] {
            let sum = norm_ppf(p) + norm_ppf(1.0 - p);
            assert!(
                sum.abs() < 1e-8,
                "norm_ppf({p}) + norm_ppf({}) = {sum}",
                1.0 - p
            );
        }
    }

    #[test]
    fn test_norm_ppf_known_values() {
        assert!((norm_ppf(0.975) - 1.95996398).abs() < 1e-5);
        assert!((norm_ppf(0.025) - (-1.95996398)).abs() < 1e-5);
        assert!((norm_ppf(0.84134) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_normal_table_shape() {
        for c in 1..=8u8 {
            let table = BreakpointTable::normal(c);
            assert_eq!(table.cutoffs().len(), (1 << c) - 1);
            assert_eq!(table.alphabet_size(), 1 << c);
            for w in table.cutoffs().windows(2) {
                assert!(w[1] > w[0], "cutoffs not increasing: {} >= {}", w[0], w[1]);
            }
        }
    }

    #[test]
    fn test_normal_table_symmetric_around_zero() {
        let table = BreakpointTable::normal(8);
        let cuts = table.cutoffs();
        for i in 0..127 {
            assert!(
                (cuts[i] + cuts[254 - i]).abs() < 1e-8,
                "cutoffs not symmetric: {} + {}",
                cuts[i],
                cuts[254 - i]
            );
        }
        assert!(cuts[127].abs() < 1e-8);
    }

    #[test]
    fn test_from_cutoffs_rejects_unsorted() {
        assert!(BreakpointTable::from_cutoffs(vec![]).is_err());
        assert!(BreakpointTable::from_cutoffs(vec![0.0, 0.0]).is_err());
        assert!(BreakpointTable::from_cutoffs(vec![1.0, -1.0]).is_err());
        assert!(BreakpointTable::from_cutoffs(vec![-1.0, 0.0, 1.0]).is_ok());
    }
}
