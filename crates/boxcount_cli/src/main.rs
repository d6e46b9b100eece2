//! Box-counting dimension of raw occupancy files.
//!
//! Reads one byte per cell (nonzero = occupied), pads to a power-of-two cube
//! and prints the occupied-box count `n`, box size `r` and local dimension
//! `df` for every level.
//!
//! ```text
//! boxcount count data/2D_apollonian_gasket.bin --shape 600,600
//! boxcount run --config jobs.toml --format json
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides `-v`); results go to stdout.

mod config;
mod report;

use anyhow::{Context, Result};
use boxcount::{load_raw, BoxCountResult, OccupancyGrid};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};
use report::DatasetReport;

/// Box-counting (fractal) dimension of 1D, 2D or 3D occupancy data.
#[derive(Parser, Debug)]
#[command(name = "boxcount")]
#[command(about = "Box-counting dimension of raw 1D/2D/3D occupancy files")]
struct Args {
	/// Log verbosity (-v debug, -vv trace).
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Count boxes in a single raw file.
	Count {
		/// Raw occupancy file, one byte per cell.
		file: PathBuf,

		/// Extent per axis, slowest first (e.g. 600,600).
		#[arg(short, long, value_delimiter = ',', required = true)]
		shape: Vec<usize>,

		/// Output format.
		#[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Count boxes for every dataset in a TOML job file.
	Run {
		/// Path to the job file.
		#[arg(short, long)]
		config: PathBuf,

		/// Output format (default: the job file's `format`).
		#[arg(short, long, value_enum)]
		format: Option<OutputFormat>,
	},
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing(args.verbose);

	match args.command {
		Command::Count {
			file,
			shape,
			format,
		} => count_file(&file, &shape, format),
		Command::Run { config, format } => run_jobs(&config, format),
	}
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "info",
		1 => "debug",
		_ => "trace",
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

/// Single file from the command line.
fn count_file(file: &Path, shape: &[usize], format: OutputFormat) -> Result<()> {
	info!("Loading {} with shape {:?}", file.display(), shape);
	let grid =
		load_raw(file, shape).with_context(|| format!("Failed to load {}", file.display()))?;
	debug!("{} of {} cells occupied", grid.occupied_count(), grid.len());

	let results = count_all(std::slice::from_ref(&grid));
	let name = file
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_else(|| file.display().to_string());
	let reports = [DatasetReport::new(&name, file, &results[0], None)];

	report::emit(&reports, format)
}

/// Every dataset in a job file, counted as one parallel batch.
fn run_jobs(config_path: &Path, format: Option<OutputFormat>) -> Result<()> {
	info!("Loading config from: {}", config_path.display());
	let config = Config::load(config_path)?;
	let config_dir = config_path.parent().unwrap_or(Path::new("."));
	let format = format.unwrap_or(config.format);

	let paths: Vec<PathBuf> = config
		.datasets
		.iter()
		.map(|dataset| config.resolve_path(config_dir, dataset))
		.collect();

	let mut grids = Vec::with_capacity(config.datasets.len());
	for (dataset, path) in config.datasets.iter().zip(&paths) {
		info!("Loading dataset '{}' from {}", dataset.name, path.display());
		let grid = load_raw(path, &dataset.shape).with_context(|| {
			format!(
				"Failed to load dataset '{}' from {}",
				dataset.name,
				path.display()
			)
		})?;
		grids.push(grid);
	}

	info!("Counting {} datasets", grids.len());
	let results = count_all(&grids);

	let reports: Vec<DatasetReport> = config
		.datasets
		.iter()
		.zip(&paths)
		.zip(&results)
		.map(|((dataset, path), result)| {
			DatasetReport::new(
				&dataset.name,
				path,
				result,
				dataset.expected_counts.as_deref(),
			)
		})
		.collect();

	for report in &reports {
		if report.result.is_degenerate() {
			warn!("Dataset '{}' is empty: dimension estimates are not finite", report.name);
		}
		if report.expected_match == Some(false) {
			warn!("Dataset '{}' does not match its expected counts", report.name);
		}
	}

	report::emit(&reports, format)?;

	let mismatched = reports
		.iter()
		.filter(|report| report.expected_match == Some(false))
		.count();
	if mismatched > 0 {
		anyhow::bail!(
			"{} of {} datasets did not match their expected counts",
			mismatched,
			reports.len()
		);
	}

	Ok(())
}

#[cfg(feature = "metrics")]
fn count_all(grids: &[OccupancyGrid]) -> Vec<BoxCountResult> {
	use boxcount::metrics::CountMetrics;
	use boxcount::pipeline::count_batch_timed;

	let mut metrics = CountMetrics::new();
	let results = count_batch_timed(grids)
		.into_iter()
		.map(|(result, elapsed_us)| {
			metrics.record_run(&result, elapsed_us);
			result
		})
		.collect();

	info!(
		"Counted {} grids: {} padded cells, {} levels, avg {:.0} us/grid, {:.1} Mcells/s",
		metrics.grids_processed,
		metrics.cells_scanned,
		metrics.levels_reduced,
		metrics.avg_run_timing_us(),
		metrics.throughput_mcells_per_s()
	);
	results
}

#[cfg(not(feature = "metrics"))]
fn count_all(grids: &[OccupancyGrid]) -> Vec<BoxCountResult> {
	boxcount::count_batch(grids)
}
