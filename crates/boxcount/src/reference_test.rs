//! Reference box counts for published datasets.
//!
//! Expected counts come from the MATLAB `boxcount` routine by F. Moisy:
//!
//! - 1D: `randcantor(0.9, 1024, 1)`
//! - 2D: Apollonian gasket image, thresholded at `c < 198`
//! - 3D: `randcantor(0.9, 32, 3)`
//!
//! The random Cantor sets were generated without a seed, so the raw files
//! cannot be regenerated. Copy them into `tests/data/` and run with
//! `cargo test -- --ignored`.

use std::path::PathBuf;

use crate::loader::load_raw;
use crate::pipeline::count_boxes;

fn data_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("data")
    .join(name)
}

fn assert_reference(name: &str, shape: &[usize], expected: &[u64]) {
  let grid = load_raw(data_path(name), shape).unwrap();
  let result = count_boxes(&grid);

  assert_eq!(result.counts, expected, "{}", name);
  assert_eq!(result.sizes.len(), expected.len());
  assert_eq!(result.dimensions.len(), expected.len() - 1);
}

#[test]
#[ignore = "needs tests/data/1D_random_cantor.bin"]
fn test_1d_random_cantor() {
  assert_reference(
    "1D_random_cantor.bin",
    &[1024],
    &[491, 273, 148, 81, 43, 25, 14, 8, 4, 2, 1],
  );
}

#[test]
#[ignore = "needs tests/data/2D_apollonian_gasket.bin"]
fn test_2d_apollonian_gasket() {
  assert_reference(
    "2D_apollonian_gasket.bin",
    &[600, 600],
    &[21831, 7473, 2732, 1045, 414, 163, 64, 22, 9, 4, 1],
  );
}

#[test]
#[ignore = "needs tests/data/3D_random_cantor.bin"]
fn test_3d_random_cantor() {
  assert_reference(
    "3D_random_cantor.bin",
    &[32, 32, 32],
    &[19401, 2695, 375, 51, 7, 1],
  );
}
