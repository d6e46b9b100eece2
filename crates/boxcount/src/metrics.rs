//! Run timing and throughput for box counting.
//!
//! Compiled only with the `metrics` feature. Metrics are owned by the caller
//! and updated explicitly; counting itself never touches them.
//!
//! # Usage
//!
//! ```ignore
//! use boxcount::metrics::{timed, CountMetrics};
//!
//! let mut metrics = CountMetrics::new();
//! let (result, elapsed_us) = timed(|| boxcount::count_boxes(&grid));
//! metrics.record_run(&result, elapsed_us);
//!
//! println!("{:.1} Mcells/s", metrics.throughput_mcells_per_s());
//! ```

use std::collections::VecDeque;

use web_time::Instant;

use crate::types::BoxCountResult;

/// Run `work` and return its result with the elapsed wall time in
/// microseconds.
pub fn timed<T>(work: impl FnOnce() -> T) -> (T, u64) {
  let start = Instant::now();
  let value = work();
  (value, start.elapsed().as_micros() as u64)
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  /// Create a new rolling window with the given capacity.
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Iterate over values (oldest to newest).
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buffer.iter()
  }

  /// Get the most recent value.
  pub fn last(&self) -> Option<&T> {
    self.buffer.back()
  }
}

impl RollingWindow<u64> {
  pub fn sum(&self) -> u64 {
    self.buffer.iter().sum()
  }

  /// Average of the window, 0 when empty.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = self.buffer.iter().min()?;
    let max = self.buffer.iter().max()?;
    Some((*min, *max))
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(128)
  }
}

/// Aggregate statistics over box-counting runs.
#[derive(Debug, Clone, Default)]
pub struct CountMetrics {
  /// Recent run times in microseconds.
  pub run_timings: RollingWindow<u64>,
  /// Grids processed since creation.
  pub grids_processed: u64,
  /// Grids whose dimension estimates contained NaN or infinity.
  pub degenerate_grids: u64,
  /// Padded cells scanned at the finest level, summed over runs.
  pub cells_scanned: u64,
  /// Merge levels executed, summed over runs.
  pub levels_reduced: u64,
  /// Sum of all run times in microseconds.
  pub total_time_us: u64,
}

impl CountMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset everything except the cumulative grid count.
  pub fn reset(&mut self) {
    self.run_timings.clear();
    self.degenerate_grids = 0;
    self.cells_scanned = 0;
    self.levels_reduced = 0;
    self.total_time_us = 0;
  }

  /// Record one finished run.
  pub fn record_run(&mut self, result: &BoxCountResult, elapsed_us: u64) {
    self.run_timings.push(elapsed_us);
    self.grids_processed += 1;
    if result.is_degenerate() {
      self.degenerate_grids += 1;
    }
    self.cells_scanned += result.padded_cells() as u64;
    self.levels_reduced += result.p() as u64;
    self.total_time_us += elapsed_us;
  }

  pub fn avg_run_timing_us(&self) -> f64 {
    self.run_timings.average()
  }

  /// Padded cells per second, in millions. 0 before any timed run.
  pub fn throughput_mcells_per_s(&self) -> f64 {
    if self.total_time_us == 0 {
      0.0
    } else {
      // cells / us == Mcells / s
      self.cells_scanned as f64 / self.total_time_us as f64
    }
  }
}
