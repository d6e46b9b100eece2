//! Job file parsing for batch runs.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// Aligned table per dataset.
	#[default]
	Text,
	/// JSON array of reports.
	Json,
}

/// Root configuration for a batch run.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Directory holding the data files, relative to the config file.
	#[serde(default)]
	pub data_dir: Option<PathBuf>,
	/// Output format when `--format` is not given.
	#[serde(default)]
	pub format: OutputFormat,
	/// Datasets to count, from `[[dataset]]` tables.
	#[serde(default, rename = "dataset")]
	pub datasets: Vec<DatasetConfig>,
}

/// One raw occupancy file.
#[derive(Debug, Deserialize)]
pub struct DatasetConfig {
	/// Name used in reports.
	pub name: String,
	/// Raw file, relative to `data_dir`.
	pub path: PathBuf,
	/// Extent per axis, slowest first.
	pub shape: Vec<usize>,
	/// Counts the run must reproduce (optional).
	#[serde(default)]
	pub expected_counts: Option<Vec<u64>>,
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::from_toml(&content)
	}

	/// Parse and validate configuration text.
	pub fn from_toml(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.datasets.is_empty() {
			anyhow::bail!("Config must have at least one [[dataset]]");
		}

		let mut names = HashSet::new();
		for dataset in &config.datasets {
			if !names.insert(dataset.name.as_str()) {
				anyhow::bail!("Duplicate dataset name '{}'", dataset.name);
			}
			boxcount::Rank::from_dims(dataset.shape.len())
				.with_context(|| format!("Dataset '{}' has shape {:?}", dataset.name, dataset.shape))?;
			if dataset.shape.contains(&0) {
				anyhow::bail!(
					"Dataset '{}' has a zero extent in shape {:?}",
					dataset.name,
					dataset.shape
				);
			}
		}

		Ok(config)
	}

	/// Full path of a dataset file, given the directory of the config file.
	pub fn resolve_path(&self, config_dir: &Path, dataset: &DatasetConfig) -> PathBuf {
		let base = match &self.data_dir {
			Some(dir) => config_dir.join(dir),
			None => config_dir.to_path_buf(),
		};
		base.join(&dataset.path)
	}
}
