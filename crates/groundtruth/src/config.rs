//! Run configuration.
//!
//! Optional `groundtruth.toml` in the working directory. Command-line flags
//! override anything set here.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::runner::RunOptions;

/// Configuration file name.
pub const CONFIG_FILE: &str = "groundtruth.toml";

/// Upper bound accepted for `max_seeds`.
const MAX_SEEDS_LIMIT: usize = 1_000_000;

/// Run configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Seed file read by the `modern` and `legacy` suites
    pub seeds_file: PathBuf,
    /// Maximum number of seeds read from the seed file
    pub max_seeds: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seeds_file: PathBuf::from(groundtruth_common::SEEDS_FILE),
            max_seeds: groundtruth_common::MAX_SEEDS,
        }
    }
}

impl RunConfig {
    /// Settings from the file at `path`.
    ///
    /// A missing file means defaults. An unreadable or malformed file is
    /// skipped with a warning.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No {}, using default seed file settings", path.display());
                return Self::default();
            },
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                return Self::default();
            },
        };

        match toml::from_str::<Self>(&contents) {
            Ok(config) => {
                info!(
                    "Seed file settings from {}: {} (max {})",
                    path.display(),
                    config.seeds_file.display(),
                    config.max_seeds
                );
                config
            },
            Err(e) => {
                warn!("Skipping {}, not a valid run config: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.max_seeds = self.max_seeds.clamp(1, MAX_SEEDS_LIMIT);
    }

    /// Runner options for this configuration.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            seeds_file: self.seeds_file.clone(),
            max_seeds: self.max_seeds,
        }
    }
}
