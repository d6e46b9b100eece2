//! Multi-resolution reduction engine.
//!
//! Each level doubles the box size. Anchors sit on a grid with stride `siz`;
//! a merge ORs the anchor with the cells `siz / 2` away along every subset of
//! axes and writes the result back into the anchor:
//!
//! ```text
//! level 1 (siz 2)      level 2 (siz 4)      level 3 (siz 8)
//! A . A . A . A .      A . . . A . . .      A . . . . . . .
//! ↑ ← anchor ORs       ↑   ORs anchors of   ↑   ORs anchors of
//!   its neighbor at 1      level 1 at 2         level 2 at 4
//! ```
//!
//! Only anchors of the previous level are read, so the fine structure can be
//! overwritten in place. The 1D, 2D and 3D cases share one loop; the rank only
//! changes the stencil size (2, 4 or 8 cells) and how many axes the anchor
//! walk iterates.

use crate::constants::{MAX_MERGE_CELLS, MAX_RANK, MERGE_AXIS_MASKS};
use crate::padding::PaddedVolume;
use crate::types::{next_coord, Rank};

/// Flat index offsets read by one merge, relative to the anchor.
///
/// Offset 0 is the anchor itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeStencil {
  offsets: [usize; MAX_MERGE_CELLS],
  len: usize,
}

impl MergeStencil {
  /// Stencil for a half-step of `half` cells over a volume with `strides`.
  pub fn new(rank: Rank, strides: &[usize; MAX_RANK], half: usize) -> Self {
    let len = rank.merge_cells();
    let mut offsets = [0; MAX_MERGE_CELLS];
    for (offset, &mask) in offsets.iter_mut().zip(&MERGE_AXIS_MASKS[..len]) {
      *offset = (0..rank.get())
        .filter(|&axis| mask & (1 << axis) != 0)
        .map(|axis| strides[axis] * half)
        .sum();
    }
    Self { offsets, len }
  }

  #[inline(always)]
  pub fn offsets(&self) -> &[usize] {
    &self.offsets[..self.len]
  }
}

/// Merge one level in place and count the occupied anchors.
///
/// `siz` is the new box size (a power of two, at least 2, at most the width).
pub fn reduce_level(volume: &mut PaddedVolume, siz: usize) -> u64 {
  let rank = volume.rank();
  let width = volume.width();
  debug_assert!(siz >= 2 && siz <= width && siz.is_power_of_two());

  let dims = rank.get();
  let strides = volume.strides();
  let stencil = MergeStencil::new(rank, &strides, siz / 2);
  let extents = [width; MAX_RANK];
  let cells = volume.cells_mut();

  let mut occupied = 0u64;
  let mut coord = [0usize; MAX_RANK];
  loop {
    let anchor: usize = coord[..dims]
      .iter()
      .zip(&strides[..dims])
      .map(|(c, stride)| c * stride)
      .sum();

    let merged = stencil.offsets().iter().any(|&offset| cells[anchor + offset]);
    cells[anchor] = merged;
    occupied += merged as u64;

    if !next_coord(&mut coord[..dims], &extents[..dims], siz) {
      break;
    }
  }
  occupied
}

/// Run every level on `volume` and return the occupied-box counts, finest
/// first.
///
/// `counts[0]` is the number of occupied cells; `counts[k]` the number of
/// occupied boxes of side `2^k`. The volume is consumed: its cells no longer
/// describe the input after the first merge.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "boxcount::reduce"))]
pub fn reduce(mut volume: PaddedVolume) -> Vec<u64> {
  let params = volume.params();
  let mut counts = Vec::with_capacity(params.levels());
  counts.push(volume.occupied_count());

  for level in 1..=params.p {
    let siz = params.box_size(level);
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("reduce_level", level, siz).entered();
    counts.push(reduce_level(&mut volume, siz));
  }

  counts
}

#[cfg(test)]
#[path = "reduction_test.rs"]
mod reduction_test;
