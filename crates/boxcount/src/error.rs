//! Error types for grid construction, loading and box counting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before any counting starts.
///
/// Once an [`OccupancyGrid`](crate::OccupancyGrid) exists, counting cannot
/// fail. Empty inputs are not an error: they produce non-finite dimension
/// estimates instead.
#[derive(Debug, Error)]
pub enum BoxCountError {
  /// Rank outside 1..=[`MAX_RANK`](crate::MAX_RANK).
  #[error("unsupported dimensionality {rank}: only 1, 2 or 3 dimensions are supported")]
  UnsupportedDimensionality { rank: usize },

  /// An axis with no cells.
  #[error("axis {axis} has zero extent")]
  ZeroExtent { axis: usize },

  /// The product of the extents overflows `usize`.
  #[error("shape {shape:?} has more cells than fit in memory")]
  TooManyCells { shape: Vec<usize> },

  /// The padded `width^rank` cube does not fit in one allocation.
  #[error("padding extent {max_extent} to a {rank}D power-of-two cube overflows the address space")]
  PaddedTooLarge { max_extent: usize, rank: usize },

  /// Cell buffer length does not match the product of the shape.
  #[error("shape {shape:?} needs {expected} cells, got {actual}")]
  ShapeMismatch {
    shape: Vec<usize>,
    expected: usize,
    actual: usize,
  },

  /// Input ended before every cell was read.
  #[error("occupancy data truncated: expected {expected} bytes, read {actual}")]
  TruncatedData { expected: usize, actual: usize },

  /// Data file could not be opened.
  #[error("failed to open {}", .path.display())]
  Open {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to read occupancy data: {0}")]
  Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BoxCountError>;
