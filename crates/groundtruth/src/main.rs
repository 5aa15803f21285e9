//! Ground-truth biome data generator.
//!
//! Rows go to stdout (or `--output`); progress and errors go to stderr.

#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use groundtruth::{open_source, write_suite_list, RunConfig, Runner, Suite};
use groundtruth_worldgen::{BiomeSource, McVersion};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log filter added unless `RUST_LOG` already covers this crate.
const DEFAULT_DIRECTIVE: &str = "groundtruth=info";

#[derive(Parser, Debug)]
#[command(name = "groundtruth", version)]
#[command(about = "Generate reference biome data from cubiomes")]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, default_value = groundtruth::config::CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one suite
    Run(RunArgs),
    /// List suites and their row counts
    List,
    /// List known versions and their codes
    Versions,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Suite to generate
    #[arg(value_enum)]
    suite: Suite,

    /// Seed file for the `modern` and `legacy` suites
    #[arg(long)]
    seeds: Option<PathBuf>,

    /// Maximum number of seeds read from the seed file
    #[arg(long)]
    max_seeds: Option<usize>,

    /// Write rows to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = match log_filter(&rust_log) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("groundtruth: {e:#}");
            return ExitCode::FAILURE;
        },
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

/// `rust_log` directives, plus [`DEFAULT_DIRECTIVE`] unless they name this
/// crate or set a global level.
fn log_filter(rust_log: &str) -> Result<EnvFilter> {
    let filter = EnvFilter::builder().parse_lossy(rust_log);
    let covered = rust_log
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .any(|d| d.starts_with(env!("CARGO_CRATE_NAME")) || d.parse::<LevelFilter>().is_ok());
    if covered {
        return Ok(filter);
    }
    Ok(filter.add_directive(DEFAULT_DIRECTIVE.parse()?))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Run(args) => {
            let config = run_config(&cli.config, &args);
            generate(open_source()?, args.suite, &config, args.output.as_deref())
        },
        Command::List => {
            let mut out = io::stdout().lock();
            write_suite_list(&mut out)?;
            Ok(out.flush()?)
        },
        Command::Versions => {
            let mut out = io::stdout().lock();
            for v in McVersion::ALL {
                writeln!(out, "{:>2} {}", v.code(), v)?;
            }
            Ok(out.flush()?)
        },
    }
}

/// Settings from the config file at `path`, overridden by `args`.
fn run_config(path: &Path, args: &RunArgs) -> RunConfig {
    let mut config = RunConfig::load_from(path);
    if let Some(seeds) = &args.seeds {
        config.seeds_file.clone_from(seeds);
    }
    if let Some(max_seeds) = args.max_seeds {
        config.max_seeds = max_seeds;
    }
    config.validate();
    config
}

fn generate<S: BiomeSource>(
    source: S,
    suite: Suite,
    config: &RunConfig,
    output: Option<&Path>,
) -> Result<()> {
    let mut runner = Runner::new(source, config.run_options());
    let plan = suite.plan();

    info!("Generating suite {}", suite);
    let summary = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            runner.run(&plan, &mut BufWriter::new(file))?
        },
        None => runner.run(&plan, &mut BufWriter::new(io::stdout().lock()))?,
    };

    info!(
        "Suite {} complete: {} versions x {} seeds, {} rows",
        suite, summary.versions, summary.seeds_per_version, summary.rows
    );
    Ok(())
}
