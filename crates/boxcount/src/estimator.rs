//! Local box-counting dimension from consecutive scales.
//!
//! ```text
//! df[k] = -(ln n[k+1] - ln n[k]) / (ln r[k+1] - ln r[k])
//! ```
//!
//! With `r[k] = 2^k` the denominator is always `ln 2`. Zero counts follow IEEE
//! semantics (`ln 0 = -inf`), so an empty grid yields NaN rather than an error.

use crate::padding::PadParams;

/// Box sides for every level: `1, 2, 4, ..., 2^p`.
pub fn box_sizes(params: PadParams) -> Vec<usize> {
  (0..=params.p).map(|level| params.box_size(level)).collect()
}

/// Discrete log-log slope between each pair of consecutive levels.
///
/// Returns one value fewer than `counts`. Both slices must have equal length.
pub fn local_dimensions(counts: &[u64], sizes: &[usize]) -> Vec<f64> {
  debug_assert_eq!(counts.len(), sizes.len());
  counts
    .windows(2)
    .zip(sizes.windows(2))
    .map(|(n, r)| {
      // -(ln n[k+1] - ln n[k]), written so equal counts give +0.0
      let log_drop = (n[0] as f64).ln() - (n[1] as f64).ln();
      let d_log_r = (r[1] as f64).ln() - (r[0] as f64).ln();
      log_drop / d_log_r
    })
    .collect()
}

#[cfg(test)]
#[path = "estimator_test.rs"]
mod estimator_test;
