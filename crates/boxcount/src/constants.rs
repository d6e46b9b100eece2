//! Layout constants for padded occupancy volumes.
//!
//! # Memory Layout
//!
//! Volumes are stored flat and row-major, with the last axis innermost:
//!
//! ```text
//! rank 3, width w:
//!
//! Address:  0        1        ...  w-1        w        ...  w²       ...
//! Content: [0,0,0]  [0,0,1]   ... [0,0,w-1]  [0,1,0]  ... [1,0,0]   ...
//!          └──────── axis 2 ────────┘
//!
//! index = x * w² + y * w + z
//! ```
//!
//! # Merge Combinations
//!
//! A merge at anchor `a` with half-step `h` reads one cell per subset of the
//! axes. Bit `i` of the combination index selects an `h` offset along axis
//! `i`:
//!
//! ```text
//! combination (binary: axis 2, axis 1, axis 0):
//!   0 = (0,0,0)  anchor itself
//!   1 = (h,0,0)
//!   2 = (0,h,0)
//!   3 = (h,h,0)
//!   4 = (0,0,h)
//!   5 = (h,0,h)
//!   6 = (0,h,h)
//!   7 = (h,h,h)
//! ```
//!
//! Rank 1 uses combinations 0-1, rank 2 uses 0-3, rank 3 uses all 8.

/// Highest supported dimensionality.
pub const MAX_RANK: usize = 3;

/// Cells read by one merge at the highest rank (2^3).
pub const MAX_MERGE_CELLS: usize = 1 << MAX_RANK;

/// Axis selection mask for each merge combination.
///
/// Entry `c` has bit `i` set when combination `c` is offset along axis `i`.
pub const MERGE_AXIS_MASKS: [u8; MAX_MERGE_CELLS] = [
  0b000, // anchor
  0b001, // +axis 0
  0b010, // +axis 1
  0b011, // +axis 0, +axis 1
  0b100, // +axis 2
  0b101, // +axis 0, +axis 2
  0b110, // +axis 1, +axis 2
  0b111, // all axes
];

/// Number of cells in a cube of side `width` at `rank` dimensions, or `None`
/// when it does not fit in one allocation.
pub const fn checked_cube_len(width: usize, rank: usize) -> Option<usize> {
  let mut len: usize = 1;
  let mut axis = 0;
  while axis < rank {
    len = match len.checked_mul(width) {
      Some(len) => len,
      None => return None,
    };
    axis += 1;
  }
  if len > isize::MAX as usize {
    return None;
  }
  Some(len)
}

/// Number of cells in a cube of side `width` at `rank` dimensions.
///
/// Only for widths already checked with [`checked_cube_len`].
#[inline(always)]
pub const fn cube_len(width: usize, rank: usize) -> usize {
  let mut len = 1;
  let mut axis = 0;
  while axis < rank {
    len *= width;
    axis += 1;
  }
  len
}

/// Row-major strides of a cube of side `width`.
///
/// Axis 0 is the slowest. Entries past `rank` are zero.
#[inline]
pub fn cube_strides(width: usize, rank: usize) -> [usize; MAX_RANK] {
  let mut strides = [0; MAX_RANK];
  let mut stride = 1;
  for axis in (0..rank).rev() {
    strides[axis] = stride;
    stride *= width;
  }
  strides
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
