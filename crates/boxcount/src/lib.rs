//! boxcount - Box-counting (fractal) dimension of binary occupancy data
//!
//! This crate estimates the box-counting dimension of 1D, 2D and 3D boolean
//! grids. Box sizes are powers of two: the input is padded with empty cells up
//! to a cubic extent of `2^p`, then halved level by level by OR-merging each
//! 2×2(×2) neighborhood in place, counting occupied boxes at every level.
//!
//! # Pipeline
//!
//! ```text
//! OccupancyGrid ──pad──▶ PaddedVolume ──reduce──▶ n ──estimate──▶ df
//!   (any shape)          (width^rank)     (p+1 counts)    (p slopes)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use boxcount::{count_boxes, OccupancyGrid};
//!
//! let grid = OccupancyGrid::from_values(&[600, 600], &raw_bytes)?;
//! let result = count_boxes(&grid);
//!
//! for (r, df) in result.finite_dimensions() {
//!     println!("box size {r}: local dimension {df:.4}");
//! }
//! ```

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{MAX_MERGE_CELLS, MAX_RANK};
pub use error::{BoxCountError, Result};
pub use types::{BoxCountResult, OccupancyGrid, Occupancy, Rank, Shape};

// Padding to a cubic power-of-two extent
pub mod padding;
pub use padding::{pad, PadParams, PaddedVolume};

// Multi-resolution reduction engine
pub mod reduction;
pub use reduction::{reduce, MergeStencil};

// Log-log slope between consecutive scales
pub mod estimator;
pub use estimator::{box_sizes, local_dimensions};

// Entry points: single grid and batches
pub mod pipeline;
pub use pipeline::{count_batch, count_boxes, count_boxes_in};

// Raw binary occupancy files
pub mod loader;
pub use loader::{load_raw, read_raw};

// Run timing and throughput
#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;
