//! Padding to a cubic power-of-two extent.
//!
//! ```text
//! input 3×5            padded 8×8 (p = 3)
//!
//! ■ □ □ □ ■            ■ □ □ □ ■ □ □ □
//! □ □ ■ □ □     ──▶    □ □ ■ □ □ □ □ □
//! □ □ □ □ ■            □ □ □ □ ■ □ □ □
//!                      □ □ □ □ □ □ □ □
//!                      ...  (empty)
//! ```
//!
//! The input always lands at the origin of every axis.

use crate::constants::{cube_len, cube_strides, MAX_RANK};
use crate::types::{next_coord, OccupancyGrid, Rank};

/// Padded width parameters: `width = 2^p`, the smallest power of two that
/// covers the largest input extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PadParams {
  /// Exponent of the padded width. Also the coarsest level.
  pub p: u32,
  /// Padded side length.
  pub width: usize,
}

impl PadParams {
  /// Parameters covering `max_extent` cells. An extent of 0 or 1 gives p = 0.
  #[inline]
  pub fn for_extent(max_extent: usize) -> Self {
    let width = max_extent.max(1).next_power_of_two();
    Self {
      p: width.trailing_zeros(),
      width,
    }
  }

  /// Parameters covering every axis of `shape`.
  pub fn for_shape(shape: &[usize]) -> Self {
    Self::for_extent(shape.iter().copied().max().unwrap_or(1))
  }

  /// Number of levels, finest to coarsest (p + 1).
  #[inline]
  pub fn levels(&self) -> usize {
    self.p as usize + 1
  }

  /// Box side at `level` (2^level).
  #[inline]
  pub fn box_size(&self, level: u32) -> usize {
    1 << level
  }
}

/// An occupancy grid padded to `width` along every axis.
///
/// Owned by a single reduction pass, which overwrites anchor cells level by
/// level.
#[derive(Clone, Debug)]
pub struct PaddedVolume {
  rank: Rank,
  params: PadParams,
  cells: Vec<bool>,
}

impl PaddedVolume {
  #[inline]
  pub fn rank(&self) -> Rank {
    self.rank
  }

  #[inline]
  pub fn params(&self) -> PadParams {
    self.params
  }

  #[inline]
  pub fn width(&self) -> usize {
    self.params.width
  }

  #[inline]
  pub fn cells(&self) -> &[bool] {
    &self.cells
  }

  #[inline]
  pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
    &mut self.cells
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Row-major strides, axis 0 slowest.
  #[inline]
  pub fn strides(&self) -> [usize; MAX_RANK] {
    cube_strides(self.params.width, self.rank.get())
  }

  /// Number of occupied cells across the whole volume.
  pub fn occupied_count(&self) -> u64 {
    self.cells.iter().filter(|&&cell| cell).count() as u64
  }

  /// Cell at `coord`, or `None` when out of bounds or of the wrong rank.
  pub fn get(&self, coord: &[usize]) -> Option<bool> {
    if coord.len() != self.rank.get() || coord.iter().any(|&c| c >= self.params.width) {
      return None;
    }
    let index = coord
      .iter()
      .zip(self.strides())
      .map(|(&c, stride)| c * stride)
      .sum::<usize>();
    Some(self.cells[index])
  }
}

/// Pad `grid` with empty cells to a `width^rank` cube, origin-aligned.
///
/// Rows along the last axis are contiguous in both layouts, so the copy is one
/// `copy_from_slice` per input row.
pub fn pad(grid: &OccupancyGrid) -> PaddedVolume {
  let rank = grid.rank();
  let params = PadParams::for_shape(grid.shape());
  let mut cells = vec![false; cube_len(params.width, rank.get())];

  let shape = grid.shape();
  let dims = rank.get();
  let row_len = shape[dims - 1];
  let dst_strides = cube_strides(params.width, dims);

  // Leading axes only; the last axis is the row itself.
  let lead = dims - 1;
  let mut coord = [0usize; MAX_RANK];
  for src_row in grid.cells().chunks_exact(row_len) {
    let dst_start: usize = coord[..lead]
      .iter()
      .zip(&dst_strides[..lead])
      .map(|(c, stride)| c * stride)
      .sum();
    cells[dst_start..dst_start + row_len].copy_from_slice(src_row);

    if lead > 0 {
      next_coord(&mut coord[..lead], &shape[..lead], 1);
    }
  }

  PaddedVolume {
    rank,
    params,
    cells,
  }
}

#[cfg(test)]
#[path = "padding_test.rs"]
mod padding_test;
