use std::f64::consts::LN_2;

use super::*;

const EPSILON: f64 = 1e-12;

#[test]
fn test_box_sizes_are_powers_of_two() {
  assert_eq!(box_sizes(PadParams::for_extent(1024)).len(), 11);
  assert_eq!(box_sizes(PadParams::for_extent(32)), vec![1, 2, 4, 8, 16, 32]);
  assert_eq!(box_sizes(PadParams::for_extent(1)), vec![1]);
}

#[test]
fn test_full_line_has_dimension_one() {
  let dims = local_dimensions(&[8, 4, 2, 1], &[1, 2, 4, 8]);
  assert_eq!(dims.len(), 3);
  for df in dims {
    assert!((df - 1.0).abs() < EPSILON, "Expected 1.0, got {}", df);
  }
}

#[test]
fn test_full_square_has_dimension_two() {
  let dims = local_dimensions(&[64, 16, 4, 1], &[1, 2, 4, 8]);
  for df in dims {
    assert!((df - 2.0).abs() < EPSILON);
  }
}

#[test]
fn test_matches_log_ratio_over_ln_2() {
  let counts = [21831, 7473, 2732, 1045];
  let dims = local_dimensions(&counts, &[1, 2, 4, 8]);
  for (k, df) in dims.iter().enumerate() {
    let expected = (counts[k] as f64 / counts[k + 1] as f64).ln() / LN_2;
    assert!((df - expected).abs() < 1e-9, "Level {}: {} vs {}", k, df, expected);
  }
}

#[test]
fn test_unchanged_count_gives_zero() {
  let dims = local_dimensions(&[2, 2], &[1, 2]);
  assert_eq!(dims, vec![0.0]);
  assert!(dims[0].is_sign_positive());
}

#[test]
fn test_single_level_gives_no_estimates() {
  assert!(local_dimensions(&[1], &[1]).is_empty());
}

/// ln(0) - ln(0) is NaN; the estimator reports it instead of failing.
#[test]
fn test_zero_counts_are_non_finite() {
  let dims = local_dimensions(&[0, 0, 0], &[1, 2, 4]);
  assert_eq!(dims.len(), 2);
  assert!(dims.iter().all(|df| df.is_nan()));
}

#[test]
fn test_drop_to_zero_is_infinite() {
  let dims = local_dimensions(&[3, 0], &[1, 2]);
  assert_eq!(dims[0], f64::INFINITY);
}
