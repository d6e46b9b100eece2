//! Test utilities: fixture generators and an independent box counter.
//!
//! The brute-force counter never merges cells; it buckets each occupied input
//! cell by `coord >> level` and counts distinct buckets. It shares no code
//! with the in-place reduction.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::MAX_RANK;
use crate::padding::PadParams;
use crate::types::{next_coord, OccupancyGrid};

// =============================================================================
// Reference counter
// =============================================================================

/// Occupied-box counts for every level, computed by bucketing coordinates.
pub fn brute_force_counts(grid: &OccupancyGrid) -> Vec<u64> {
  let params = PadParams::for_shape(grid.shape());
  let dims = grid.rank().get();
  let occupied = occupied_coords(grid);

  (0..=params.p)
    .map(|level| {
      let boxes: HashSet<[usize; MAX_RANK]> = occupied
        .iter()
        .map(|coord| {
          let mut key = [0; MAX_RANK];
          for axis in 0..dims {
            key[axis] = coord[axis] >> level;
          }
          key
        })
        .collect();
      boxes.len() as u64
    })
    .collect()
}

fn occupied_coords(grid: &OccupancyGrid) -> Vec<[usize; MAX_RANK]> {
  let dims = grid.rank().get();
  let mut coords = Vec::new();
  let mut coord = [0usize; MAX_RANK];
  for &cell in grid.cells() {
    if cell {
      coords.push(coord);
    }
    next_coord(&mut coord[..dims], grid.shape(), 1);
  }
  coords
}

// =============================================================================
// Fixture generators
// =============================================================================

/// Sierpinski triangle on a `2^p` square: `(i, j)` occupied iff `i & j == 0`.
///
/// Exactly `3^(p - k)` boxes of side `2^k` are occupied, so every local
/// dimension is `ln 3 / ln 2`.
pub fn sierpinski_2d(p: u32) -> OccupancyGrid {
  let width = 1usize << p;
  OccupancyGrid::from_fn(&[width, width], |c| c[0] & c[1] == 0).unwrap()
}

/// 3D analogue with pairwise disjoint bits.
///
/// Exactly `4^(p - k)` boxes of side `2^k` are occupied (dimension 2).
pub fn disjoint_bits_3d(p: u32) -> OccupancyGrid {
  let width = 1usize << p;
  OccupancyGrid::from_fn(&[width, width, width], |c| {
    c[0] & c[1] == 0 && c[1] & c[2] == 0 && c[0] & c[2] == 0
  })
  .unwrap()
}

/// Every cell occupied.
pub fn full(shape: &[usize]) -> OccupancyGrid {
  OccupancyGrid::from_fn(shape, |_| true).unwrap()
}

/// Reproducible random grid with the given fill probability.
pub fn random_grid(shape: &[usize], density: f64, seed: u64) -> OccupancyGrid {
  let mut rng = StdRng::seed_from_u64(seed);
  OccupancyGrid::from_fn(shape, |_| rng.random_bool(density)).unwrap()
}
