use super::*;

#[test]
fn test_max_merge_cells_matches_rank() {
  assert_eq!(MAX_MERGE_CELLS, 8);
  assert_eq!(MERGE_AXIS_MASKS.len(), MAX_MERGE_CELLS);
}

#[test]
fn test_merge_masks_are_binary_counter() {
  for (combination, &mask) in MERGE_AXIS_MASKS.iter().enumerate() {
    assert_eq!(combination, mask as usize, "mask {} out of order", combination);
  }
}

/// The first 2^rank combinations only touch the first `rank` axes.
#[test]
fn test_merge_masks_prefix_per_rank() {
  for rank in 1..=MAX_RANK {
    for &mask in &MERGE_AXIS_MASKS[..1 << rank] {
      assert!((mask as usize) < (1 << rank), "rank {} reads axis past its last", rank);
    }
  }
}

#[test]
fn test_cube_len() {
  assert_eq!(cube_len(8, 1), 8);
  assert_eq!(cube_len(8, 2), 64);
  assert_eq!(cube_len(8, 3), 512);
  assert_eq!(cube_len(1, 3), 1);
}

#[test]
fn test_checked_cube_len() {
  assert_eq!(checked_cube_len(8, 3), Some(512));
  assert_eq!(checked_cube_len(1 << 22, 2), Some(1 << 44));
  assert_eq!(checked_cube_len(1 << 22, 3), None);
  assert_eq!(checked_cube_len(1 << 32, 2), None);
  // Fits in usize but not in one allocation.
  assert_eq!(checked_cube_len(1 << 63, 1), None);
}

#[test]
fn test_cube_strides_row_major() {
  assert_eq!(cube_strides(4, 1), [1, 0, 0]);
  assert_eq!(cube_strides(4, 2), [4, 1, 0]);
  assert_eq!(cube_strides(4, 3), [16, 4, 1]);
}
