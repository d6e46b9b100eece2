//! Core data types: occupancy grids, ranks and box-counting results.

use smallvec::SmallVec;

use crate::constants::{checked_cube_len, MAX_RANK};
use crate::error::{BoxCountError, Result};

/// Per-axis extents, axis 0 first.
pub type Shape = SmallVec<[usize; MAX_RANK]>;

/// Supported dimensionality of an occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(into = "usize"))]
pub enum Rank {
  One = 1,
  Two = 2,
  Three = 3,
}

impl Rank {
  /// Rank for a number of axes.
  pub fn from_dims(dims: usize) -> Result<Self> {
    match dims {
      1 => Ok(Rank::One),
      2 => Ok(Rank::Two),
      3 => Ok(Rank::Three),
      rank => Err(BoxCountError::UnsupportedDimensionality { rank }),
    }
  }

  /// Number of axes.
  #[inline]
  pub fn get(self) -> usize {
    self as usize
  }

  /// Cells combined by one merge (2, 4 or 8).
  #[inline]
  pub fn merge_cells(self) -> usize {
    1 << self.get()
  }
}

impl From<Rank> for usize {
  fn from(rank: Rank) -> Self {
    rank.get()
  }
}

impl TryFrom<usize> for Rank {
  type Error = BoxCountError;

  fn try_from(dims: usize) -> Result<Self> {
    Rank::from_dims(dims)
  }
}

/// Values that can be read as occupied / empty.
///
/// Anything nonzero is occupied. For floats this includes NaN.
pub trait Occupancy {
  fn is_occupied(&self) -> bool;
}

impl Occupancy for bool {
  #[inline(always)]
  fn is_occupied(&self) -> bool {
    *self
  }
}

macro_rules! impl_occupancy_nonzero {
  ($zero:expr => $($t:ty),*) => {
    $(
      impl Occupancy for $t {
        #[inline(always)]
        fn is_occupied(&self) -> bool {
          *self != $zero
        }
      }
    )*
  };
}

impl_occupancy_nonzero!(0 => u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_occupancy_nonzero!(0.0 => f32, f64);

/// Check a shape and return its rank and cell count.
///
/// Rank is checked before extents, so a rank-4 shape with a zero axis still
/// reports the rank. The padded cube must also fit in memory, so that
/// counting a constructed grid cannot overflow.
pub(crate) fn validate_shape(shape: &[usize]) -> Result<(Rank, usize)> {
  let rank = Rank::from_dims(shape.len())?;
  if let Some(axis) = shape.iter().position(|&extent| extent == 0) {
    return Err(BoxCountError::ZeroExtent { axis });
  }

  let len = shape
    .iter()
    .try_fold(1usize, |len, &extent| len.checked_mul(extent))
    .ok_or_else(|| BoxCountError::TooManyCells {
      shape: shape.to_vec(),
    })?;

  let max_extent = shape.iter().copied().max().unwrap_or(1);
  max_extent
    .checked_next_power_of_two()
    .and_then(|width| checked_cube_len(width, rank.get()))
    .ok_or(BoxCountError::PaddedTooLarge {
      max_extent,
      rank: rank.get(),
    })?;

  Ok((rank, len))
}

/// Advance a row-major coordinate by `step` along the last axis, carrying
/// into slower axes.
///
/// Returns false once every axis has wrapped back to zero.
#[inline]
pub(crate) fn next_coord(coord: &mut [usize], extents: &[usize], step: usize) -> bool {
  for axis in (0..coord.len()).rev() {
    coord[axis] += step;
    if coord[axis] < extents[axis] {
      return true;
    }
    coord[axis] = 0;
  }
  false
}

/// Binary occupancy array of rank 1, 2 or 3.
///
/// Cells are stored flat and row-major (last axis fastest), matching the
/// layout of raw occupancy files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
  rank: Rank,
  shape: Shape,
  cells: Vec<bool>,
}

impl OccupancyGrid {
  /// Create a grid from boolean cells.
  pub fn new(shape: &[usize], cells: Vec<bool>) -> Result<Self> {
    let (rank, expected) = validate_shape(shape)?;
    if cells.len() != expected {
      return Err(BoxCountError::ShapeMismatch {
        shape: shape.to_vec(),
        expected,
        actual: cells.len(),
      });
    }
    Ok(Self {
      rank,
      shape: Shape::from_slice(shape),
      cells,
    })
  }

  /// Create a grid from any values, nonzero = occupied.
  pub fn from_values<T: Occupancy>(shape: &[usize], values: &[T]) -> Result<Self> {
    Self::new(shape, values.iter().map(Occupancy::is_occupied).collect())
  }

  /// Create a grid by evaluating `f` at every coordinate in row-major order.
  pub fn from_fn<F>(shape: &[usize], mut f: F) -> Result<Self>
  where
    F: FnMut(&[usize]) -> bool,
  {
    let (rank, len) = validate_shape(shape)?;
    let mut cells = Vec::with_capacity(len);
    let mut coord = [0usize; MAX_RANK];
    let coord = &mut coord[..rank.get()];
    loop {
      cells.push(f(coord));
      if !next_coord(coord, shape, 1) {
        break;
      }
    }
    Self::new(shape, cells)
  }

  /// Grid with every cell empty.
  pub fn empty(shape: &[usize]) -> Result<Self> {
    Self::from_fn(shape, |_| false)
  }

  #[inline]
  pub fn rank(&self) -> Rank {
    self.rank
  }

  #[inline]
  pub fn shape(&self) -> &[usize] {
    &self.shape
  }

  #[inline]
  pub fn cells(&self) -> &[bool] {
    &self.cells
  }

  /// Total number of cells.
  #[inline]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  /// Always false: every axis has at least one cell.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Largest extent over all axes.
  pub fn max_extent(&self) -> usize {
    self.shape.iter().copied().max().unwrap_or(1)
  }

  /// Number of occupied cells.
  pub fn occupied_count(&self) -> u64 {
    self.cells.iter().filter(|&&cell| cell).count() as u64
  }

  /// Row-major strides, axis 0 slowest.
  pub fn strides(&self) -> [usize; MAX_RANK] {
    let mut strides = [0; MAX_RANK];
    let mut stride = 1;
    for axis in (0..self.rank.get()).rev() {
      strides[axis] = stride;
      stride *= self.shape[axis];
    }
    strides
  }

  /// Cell at `coord`, or `None` when out of bounds or of the wrong rank.
  pub fn get(&self, coord: &[usize]) -> Option<bool> {
    if coord.len() != self.rank.get() {
      return None;
    }
    let strides = self.strides();
    let mut index = 0;
    for (axis, &c) in coord.iter().enumerate() {
      if c >= self.shape[axis] {
        return None;
      }
      index += c * strides[axis];
    }
    Some(self.cells[index])
  }
}

/// Box counts, box sizes and local dimension estimates for one grid.
///
/// `counts[k]` is the number of occupied boxes of side `sizes[k] = 2^k`;
/// `dimensions[k]` is the log-log slope between levels `k` and `k + 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoxCountResult {
  /// Rank of the input grid.
  pub rank: Rank,
  /// Shape of the input grid before padding.
  pub shape: Shape,
  /// Occupied boxes per level, finest first.
  pub counts: Vec<u64>,
  /// Box side per level: 1, 2, 4, ..., 2^p.
  pub sizes: Vec<usize>,
  /// Local dimension estimates, one fewer than levels. Non-finite when the
  /// grid is empty.
  pub dimensions: Vec<f64>,
}

impl BoxCountResult {
  /// Exponent of the padded width.
  pub fn p(&self) -> u32 {
    self.sizes.len().saturating_sub(1) as u32
  }

  /// Padded width (largest box size).
  pub fn width(&self) -> usize {
    self.sizes.last().copied().unwrap_or(1)
  }

  /// Number of levels (p + 1).
  pub fn levels(&self) -> usize {
    self.counts.len()
  }

  /// Cells in the padded volume.
  pub fn padded_cells(&self) -> usize {
    crate::constants::cube_len(self.width(), self.rank.get())
  }

  /// Counts as floating point, ready for log-space work.
  pub fn counts_f64(&self) -> Vec<f64> {
    self.counts.iter().map(|&n| n as f64).collect()
  }

  /// True when any dimension estimate is NaN or infinite.
  pub fn is_degenerate(&self) -> bool {
    self.dimensions.iter().any(|df| !df.is_finite())
  }

  /// `(box size, dimension)` pairs with non-finite estimates skipped.
  ///
  /// The box size is the finer of the two scales the estimate spans.
  pub fn finite_dimensions(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
    self
      .sizes
      .iter()
      .zip(&self.dimensions)
      .filter(|(_, df)| df.is_finite())
      .map(|(&r, &df)| (r, df))
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
