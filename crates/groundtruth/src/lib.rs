//! # Groundtruth
//!
//! Reference biome data for checking cubiomes-compatible implementations.
//!
//! This crate ties together:
//! - Suite catalogue: which versions, seeds, and probes each data set covers
//! - Runner: enumerates a suite against a [`BiomeSource`] and writes rows
//! - Configuration: `groundtruth.toml` defaults for seed-file suites

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod runner;
pub mod suite;

pub use config::RunConfig;
pub use runner::{RunOptions, RunSummary, Runner};
pub use suite::{Suite, SuitePlan};

use groundtruth_common::GroundTruthResult;
use groundtruth_worldgen::BiomeSource;
use std::io::{self, Write};

/// The biome backend compiled into this build.
#[cfg(feature = "cubiomes")]
pub fn open_source() -> GroundTruthResult<Box<dyn BiomeSource>> {
    Ok(Box::new(groundtruth_worldgen::CubiomesGenerator::new()?))
}

/// The biome backend compiled into this build.
#[cfg(not(feature = "cubiomes"))]
pub fn open_source() -> GroundTruthResult<Box<dyn BiomeSource>> {
    Err(groundtruth_common::GroundTruthError::BackendUnavailable)
}

/// Write one line per suite: name, versions, and row count.
///
/// Seed-file suites report rows per seed.
pub fn write_suite_list<W: Write>(out: &mut W) -> io::Result<()> {
    for suite in Suite::ALL {
        let plan = suite.plan();
        let versions: Vec<&str> = plan.versions.iter().map(|v| v.name()).collect();
        let rows = if plan.needs_seed_file() {
            format!("{} rows per seed", plan.expected_rows(1))
        } else {
            format!("{} rows", plan.expected_rows(0))
        };
        writeln!(out, "{:<9} {:<22} [{}]", suite.name(), rows, versions.join(", "))?;
    }
    Ok(())
}
