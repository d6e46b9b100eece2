//! Result formatting for the terminal and JSON.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use boxcount::BoxCountResult;
use serde::Serialize;

use crate::config::OutputFormat;

/// One dataset's result, ready to print.
#[derive(Debug, Serialize)]
pub struct DatasetReport<'a> {
	pub name: &'a str,
	pub path: &'a Path,
	#[serde(flatten)]
	pub result: &'a BoxCountResult,
	/// `None` when no expected counts were configured.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expected_match: Option<bool>,
}

impl<'a> DatasetReport<'a> {
	pub fn new(
		name: &'a str,
		path: &'a Path,
		result: &'a BoxCountResult,
		expected: Option<&[u64]>,
	) -> Self {
		Self {
			name,
			path,
			result,
			expected_match: expected.map(|counts| counts == result.counts.as_slice()),
		}
	}
}

/// Print all reports to stdout in the requested format.
pub fn emit(reports: &[DatasetReport<'_>], format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Text => {
			for report in reports {
				print!("{}", render_text(report));
			}
		}
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(reports)?);
		}
	}
	Ok(())
}

/// Table of box size, count and local dimension.
///
/// The dimension on row `k` is the slope between rows `k` and `k + 1`, so the
/// last row has none.
pub fn render_text(report: &DatasetReport<'_>) -> String {
	let result = report.result;
	let shape = result
		.shape
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join("x");

	let mut out = String::new();
	let _ = writeln!(
		out,
		"{}: {}D {}, padded to {} (p = {})",
		report.name,
		result.rank.get(),
		shape,
		result.width(),
		result.p()
	);
	let _ = writeln!(out, "{:>10} {:>12} {:>10}", "r", "n", "df");
	for (k, (&r, &n)) in result.sizes.iter().zip(&result.counts).enumerate() {
		let df = match result.dimensions.get(k) {
			Some(df) => format!("{:.4}", df),
			None => "-".to_string(),
		};
		let _ = writeln!(out, "{:>10} {:>12} {:>10}", r, n, df);
	}
	match report.expected_match {
		Some(true) => {
			let _ = writeln!(out, "  expected counts: match");
		}
		Some(false) => {
			let _ = writeln!(out, "  expected counts: MISMATCH");
		}
		None => {}
	}
	out
}
