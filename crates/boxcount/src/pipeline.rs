//! Entry points: pad → reduce → estimate.
//!
//! A single grid always runs on the calling thread. Batches of independent
//! grids are spread over rayon's pool, one grid per task; no state is shared
//! between them.

use rayon::prelude::*;

use crate::error::Result;
use crate::estimator::{box_sizes, local_dimensions};
use crate::padding::pad;
use crate::reduction::reduce;
use crate::types::{BoxCountResult, Occupancy, OccupancyGrid, Shape};

/// Box counts, sizes and local dimensions for one grid.
///
/// The grid is copied into a private padded volume; it is never modified.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "boxcount::count_boxes"))]
pub fn count_boxes(grid: &OccupancyGrid) -> BoxCountResult {
  let volume = pad(grid);
  let params = volume.params();

  let counts = reduce(volume);
  let sizes = box_sizes(params);
  let dimensions = local_dimensions(&counts, &sizes);

  BoxCountResult {
    rank: grid.rank(),
    shape: Shape::from_slice(grid.shape()),
    counts,
    sizes,
    dimensions,
  }
}

/// Count boxes directly from raw values, nonzero = occupied.
///
/// Fails with `UnsupportedDimensionality` for shapes of rank 0 or above 3, and
/// with `PaddedTooLarge` when the padded cube would not fit in memory.
pub fn count_boxes_in<T: Occupancy>(shape: &[usize], values: &[T]) -> Result<BoxCountResult> {
  let grid = OccupancyGrid::from_values(shape, values)?;
  Ok(count_boxes(&grid))
}

/// Count boxes for many grids in parallel using rayon.
///
/// Results are in input order.
pub fn count_batch(grids: &[OccupancyGrid]) -> Vec<BoxCountResult> {
  grids.par_iter().map(count_boxes).collect()
}

/// Like [`count_batch`], also returning each run's wall time in microseconds.
#[cfg(feature = "metrics")]
pub fn count_batch_timed(grids: &[OccupancyGrid]) -> Vec<(BoxCountResult, u64)> {
  grids
    .par_iter()
    .map(|grid| crate::metrics::timed(|| count_boxes(grid)))
    .collect()
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
