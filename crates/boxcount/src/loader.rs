//! Raw binary occupancy files.
//!
//! One unsigned byte per cell, row-major (last axis fastest), no header. Any
//! nonzero byte is occupied. Exactly `prod(shape)` bytes are read; anything
//! after them is ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{BoxCountError, Result};
use crate::types::{validate_shape, OccupancyGrid};

/// Read a grid of `shape` from any byte source.
pub fn read_raw<R: Read>(reader: R, shape: &[usize]) -> Result<OccupancyGrid> {
  let (_, expected) = validate_shape(shape)?;

  // Not preallocated: `expected` may be far larger than the input.
  let mut bytes = Vec::new();
  reader.take(expected as u64).read_to_end(&mut bytes)?;
  if bytes.len() < expected {
    return Err(BoxCountError::TruncatedData {
      expected,
      actual: bytes.len(),
    });
  }

  OccupancyGrid::from_values(shape, &bytes)
}

/// Read a grid of `shape` from a raw file.
pub fn load_raw(path: impl AsRef<Path>, shape: &[usize]) -> Result<OccupancyGrid> {
  let path = path.as_ref();
  let file = File::open(path).map_err(|source| BoxCountError::Open {
    path: path.to_path_buf(),
    source,
  })?;
  read_raw(BufReader::new(file), shape)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;
