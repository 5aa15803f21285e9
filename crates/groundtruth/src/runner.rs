//! Turns a [`SuitePlan`] into rows.
//!
//! Single-threaded and synchronous. Rows go to the caller's writer; progress
//! goes to `tracing`, which the binary routes to stderr.

use crate::suite::{CoordSource, Lifecycle, Sampling, SeedSource, SuitePlan};
use groundtruth_common::{read_seeds_file, Coord, GroundTruthResult, Lcg, Row, FAR, ORIGIN};
use groundtruth_worldgen::{BiomeSource, Dimension, McVersion, NO_FLAGS};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options that are not part of a suite's definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// File read by seed-file suites.
    pub seeds_file: PathBuf,
    /// Cap on seeds read from the file.
    pub max_seeds: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seeds_file: PathBuf::from(groundtruth_common::SEEDS_FILE),
            max_seeds: groundtruth_common::MAX_SEEDS,
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Rows written.
    pub rows: usize,
    /// Seeds processed per version.
    pub seeds_per_version: usize,
    /// Versions processed.
    pub versions: usize,
}

/// Drives a [`BiomeSource`] through suite plans.
pub struct Runner<S> {
    source: S,
    options: RunOptions,
}

/// Seeds for one run, with the LCG state shared across versions.
///
/// Random probes draw from the same LCG right after the seed. List-seeded
/// plans still own an LCG (started at zero) so random probes stay
/// deterministic.
struct SeedStream {
    list: Option<Vec<i64>>,
    lcg: Lcg,
    per_version: usize,
}

impl SeedStream {
    fn seed(&mut self, index: usize) -> i64 {
        match &self.list {
            Some(list) => list[index],
            None => self.lcg.next_seed(),
        }
    }
}

impl<S: BiomeSource> Runner<S> {
    /// Creates a runner over `source`.
    pub fn new(source: S, options: RunOptions) -> Self {
        Self { source, options }
    }

    /// Gives the biome source back.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Run `plan`, writing one line per row to `out`.
    ///
    /// If the plan needs the seed file and it cannot be opened, nothing is
    /// written and the error is returned.
    pub fn run<W: Write>(
        &mut self,
        plan: &SuitePlan,
        out: &mut W,
    ) -> GroundTruthResult<RunSummary> {
        let mut seeds = self.load_seeds(plan)?;

        let mut rows = 0;
        for &version in plan.versions {
            info!("Processing version {} (code {})...", version, version.code());
            if plan.lifecycle == Lifecycle::PerVersion {
                self.source.setup(version, NO_FLAGS);
            }

            for i in 0..seeds.per_version {
                let seed = seeds.seed(i);

                if plan.lifecycle == Lifecycle::PerSeed {
                    self.source.setup(version, NO_FLAGS);
                }
                self.source.apply_seed(Dimension::Overworld, seed as u64);

                rows += self.write_case(plan, version, seed, i, &mut seeds.lcg, out)?;

                if plan.flush_every.is_some_and(|n| i % n.get() == 0) {
                    out.flush()?;
                }
            }
        }
        out.flush()?;

        info!("Done. Wrote {} rows.", rows);
        Ok(RunSummary {
            rows,
            seeds_per_version: seeds.per_version,
            versions: plan.versions.len(),
        })
    }

    fn load_seeds(&self, plan: &SuitePlan) -> GroundTruthResult<SeedStream> {
        let (list, start) = match plan.seeds {
            SeedSource::Fixed(list) => (Some(list.to_vec()), 0),
            SeedSource::Lcg { start, .. } => (None, start),
            SeedSource::File => {
                let path = &self.options.seeds_file;
                info!("Opening {}...", path.display());
                let list = read_seeds_file(path, self.options.max_seeds)?;
                info!("Read {} seeds.", list.len());
                (Some(list), 0)
            }
        };

        let per_version = plan.seeds_per_version(list.as_ref().map_or(0, Vec::len));
        debug!("{} seeds per version, LCG start {:#x}", per_version, start);
        Ok(SeedStream {
            list,
            lcg: Lcg::new(start),
            per_version,
        })
    }

    /// Sample every probe of one seed. Returns rows written.
    fn write_case<W: Write>(
        &self,
        plan: &SuitePlan,
        version: McVersion,
        seed: i64,
        index: usize,
        lcg: &mut Lcg,
        out: &mut W,
    ) -> GroundTruthResult<usize> {
        let code = version.code();
        let Sampling { scale, y } = plan.sampling;
        let sample = |c: Coord| self.source.biome_at(scale, c.x, y, c.z);

        let point = |c: Coord| Row::Point {
            version: code,
            seed,
            x: c.x,
            z: c.z,
            biome: sample(c),
        };

        match plan.coords {
            CoordSource::Fixed(coords) => {
                for &c in coords {
                    writeln!(out, "{}", point(c))?;
                }
                Ok(coords.len())
            }
            CoordSource::OriginFar => {
                let row = Row::Pair {
                    version: code,
                    seed,
                    origin: sample(ORIGIN),
                    far: sample(FAR),
                };
                writeln!(out, "{row}")?;
                Ok(1)
            }
            CoordSource::Offset { span } => {
                let x = lcg.random_offset(span);
                let z = lcg.random_offset(span);
                writeln!(out, "{}", point(Coord::new(x, z)))?;
                Ok(1)
            }
            CoordSource::Tiered(tiers) => {
                let range = tiers.range_for(index);
                let x = lcg.random_coord(range);
                let z = lcg.random_coord(range);
                writeln!(out, "{}", point(Coord::new(x, z)))?;
                Ok(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::Suite;
    use groundtruth_common::{GroundTruthError, FIXED_COORDS};
    use std::io;
    use std::num::{NonZeroU32, NonZeroUsize};
    use tempfile::NamedTempFile;

    /// Deterministic stand-in for the C library that records its calls.
    #[derive(Debug, Default)]
    struct FakeSource {
        version: Option<McVersion>,
        seed: u64,
        setups: usize,
        seeds_applied: usize,
        queries: std::cell::Cell<usize>,
    }

    impl BiomeSource for FakeSource {
        fn setup(&mut self, version: McVersion, _flags: u32) {
            self.version = Some(version);
            self.setups += 1;
        }

        fn apply_seed(&mut self, _dimension: Dimension, seed: u64) {
            self.seed = seed;
            self.seeds_applied += 1;
        }

        fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> i32 {
            self.queries.set(self.queries.get() + 1);
            let code = self.version.map_or(0, McVersion::code) as u64;
            let h = self.seed
                ^ code.rotate_left(7)
                ^ (x as u64).rotate_left(17)
                ^ (z as u64).rotate_left(31)
                ^ (y as u64).rotate_left(43)
                ^ scale as u64;
            (h.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 58) as i32
        }
    }

    /// Counts flushes and keeps everything written.
    #[derive(Default)]
    struct CountingWriter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl io::Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    type SuiteOutput = (GroundTruthResult<RunSummary>, String, FakeSource);

    fn run_suite(suite: Suite, options: RunOptions) -> SuiteOutput {
        let mut runner = Runner::new(FakeSource::default(), options);
        let mut out = Vec::new();
        let result = runner.run(&suite.plan(), &mut out);
        let text = String::from_utf8(out).expect("Rows should be UTF-8");
        (result, text, runner.into_source())
    }

    fn seeds_file(seeds: &[i64]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        for seed in seeds {
            writeln!(file, "{seed}").expect("Failed to write seed");
        }
        file
    }

    fn fields(line: &str) -> Vec<i64> {
        line.split(' ')
            .map(|f| f.parse().expect("Every field should be an integer"))
            .collect()
    }

    #[test]
    fn test_fixed_suite() {
        let (result, text, source) = run_suite(Suite::Fixed, RunOptions::default());
        let summary = result.expect("Fixed suite should run");

        assert_eq!(summary.rows, 900);
        assert_eq!(text.lines().count(), 900);
        // Setup and seed once per (version, seed).
        assert_eq!(source.setups, 180);
        assert_eq!(source.seeds_applied, 180);
        assert_eq!(source.queries.get(), 900);

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("21 0 0 0 "));
        assert!(lines[1].starts_with("21 0 100 100 "));
        assert!(lines[5].starts_with("21 1 0 0 "));
        assert!(lines[15].starts_with("21 -1 0 0 "));
        assert!(lines[899].starts_with("3 999999999999 -5000 -5000 "));
    }

    #[test]
    fn test_random_suite_draws_seed_then_coords() {
        let (result, text, _) = run_suite(Suite::Random, RunOptions::default());
        assert_eq!(result.expect("Random suite should run").rows, 1800);

        let first = fields(text.lines().next().expect("At least one row"));
        assert_eq!(&first[..4], &[21, 8_251_718_639_694_428_012, 1_967_307, 6_005_758]);

        for line in text.lines() {
            let f = fields(line);
            assert_eq!(f.len(), 5);
            assert!((-10_000_000..10_000_000).contains(&f[2]));
            assert!((-10_000_000..10_000_000).contains(&f[3]));
        }
    }

    #[test]
    fn test_lcg_continues_across_versions() {
        let (_, text, _) = run_suite(Suite::Beta, RunOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10_000);

        let mut lcg = Lcg::new(0xBE7A_1234_5678);
        for _ in 0..5000 * 3 {
            lcg.next_u64();
        }
        let expected_seed = lcg.next_seed();

        let first_b18 = fields(lines[5000]);
        assert_eq!(first_b18[0], 2);
        assert_eq!(first_b18[1], expected_seed);
    }

    #[test]
    fn test_beta_suite_tiers() {
        let (_, text, _) = run_suite(Suite::Beta, RunOptions::default());
        let first = fields(text.lines().next().expect("At least one row"));
        assert_eq!(&first[..4], &[1, 4_516_894_054_748_273_767, -806, 384]);

        for (i, line) in text.lines().enumerate() {
            let f = fields(line);
            let max = i64::from(groundtruth_common::RangeTiers::BETA.range_for(i % 5000));
            assert!(f[2].abs() <= max && f[3].abs() <= max, "row {i}: {line}");
        }
    }

    #[test]
    fn test_versions_suite_pairs() {
        let (result, text, source) = run_suite(Suite::Versions, RunOptions::default());
        assert_eq!(result.expect("Versions suite should run").rows, 105_000);
        assert_eq!(source.queries.get(), 210_000);

        let first = fields(text.lines().next().expect("At least one row"));
        assert_eq!(first.len(), 4);
        assert_eq!(&first[..2], &[1, -254_144_242_660_607_744]);
        assert_eq!(text.lines().last().map(|l| fields(l)[0]), Some(21));
    }

    #[test]
    fn test_diverse_suite_row_count() {
        let (result, text, _) = run_suite(Suite::Diverse, RunOptions::default());
        assert_eq!(result.expect("Diverse suite should run").rows, 99_997);
        assert_eq!(text.lines().count(), Suite::Diverse.plan().expected_rows(0));
        let first = fields(text.lines().next().expect("At least one row"));
        assert_eq!(&first[..2], &[3, 3_921_327_711_659_244_647]);
    }

    #[test]
    fn test_modern_suite_from_seed_file() {
        let file = seeds_file(&[42, -1, 12345]);
        let options = RunOptions {
            seeds_file: file.path().to_path_buf(),
            ..RunOptions::default()
        };
        let (result, text, source) = run_suite(Suite::Modern, options);
        let summary = result.expect("Modern suite should run");

        assert_eq!(summary.rows, 15);
        assert_eq!(summary.seeds_per_version, 3);
        // Setup once per version, seed once per (version, seed).
        assert_eq!(source.setups, 5);
        assert_eq!(source.seeds_applied, 15);

        let codes: Vec<i64> = text.lines().step_by(3).map(|l| fields(l)[0]).collect();
        assert_eq!(codes, vec![22, 23, 24, 25, 28]);
        assert_eq!(fields(text.lines().nth(1).expect("Second row"))[1], -1);
    }

    #[test]
    fn test_legacy_suite_samples_block_scale() {
        let file = seeds_file(&[7, 8]);
        let options = RunOptions {
            seeds_file: file.path().to_path_buf(),
            ..RunOptions::default()
        };
        let mut runner = Runner::new(FakeSource::default(), options);
        let mut out = Vec::new();
        runner.run(&Suite::Legacy.plan(), &mut out).expect("Legacy suite should run");

        let text = String::from_utf8(out).expect("Rows should be UTF-8");
        assert_eq!(text.lines().count(), 2 * 2 * 5);

        let mut reference = FakeSource::default();
        reference.setup(McVersion::B1_7, NO_FLAGS);
        reference.apply_seed(Dimension::Overworld, 7);
        for (line, c) in text.lines().zip(FIXED_COORDS) {
            let expected = reference.biome_at(1, c.x, 64, c.z);
            assert_eq!(line, format!("1 7 {} {} {}", c.x, c.z, expected));
        }
    }

    #[test]
    fn test_seed_file_cap() {
        let seeds: Vec<i64> = (0..12).collect();
        let file = seeds_file(&seeds);
        let options = RunOptions {
            seeds_file: file.path().to_path_buf(),
            max_seeds: 10,
        };
        let (result, _, _) = run_suite(Suite::Modern, options);
        assert_eq!(result.expect("Modern suite should run").rows, 50);
    }

    #[test]
    fn test_missing_seed_file_writes_nothing() {
        let options = RunOptions {
            seeds_file: PathBuf::from("/nonexistent/path/seeds.txt"),
            ..RunOptions::default()
        };
        let (result, text, source) = run_suite(Suite::Legacy, options);

        assert!(matches!(result, Err(GroundTruthError::SeedFile { .. })));
        assert!(text.is_empty());
        assert_eq!(source.setups, 0);
    }

    #[test]
    fn test_periodic_flush() {
        let seeds: Vec<i64> = (0..401).collect();
        let file = seeds_file(&seeds);
        let mut runner = Runner::new(
            FakeSource::default(),
            RunOptions {
                seeds_file: file.path().to_path_buf(),
                ..RunOptions::default()
            },
        );
        let mut out = CountingWriter::default();
        runner.run(&Suite::Modern.plan(), &mut out).expect("Modern suite should run");

        // Seeds 0, 200 and 400 of each of 5 versions, plus the final flush.
        assert_eq!(out.flushes, 5 * 3 + 1);
        assert_eq!(out.data.iter().filter(|&&b| b == b'\n').count(), 5 * 401);
    }

    #[test]
    fn test_flush_interval_of_one_flushes_every_seed() {
        let plan = SuitePlan {
            flush_every: Some(NonZeroUsize::MIN),
            ..Suite::Fixed.plan()
        };
        let mut runner = Runner::new(FakeSource::default(), RunOptions::default());
        let mut out = CountingWriter::default();
        runner.run(&plan, &mut out).expect("Plan should run");

        assert_eq!(out.flushes, 18 * 10 + 1);
    }

    #[test]
    fn test_same_plan_same_output() {
        let (_, a, _) = run_suite(Suite::Random, RunOptions::default());
        let (_, b, _) = run_suite(Suite::Random, RunOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_plan_with_list_seeds_and_random_probes() {
        let plan = SuitePlan {
            versions: &[McVersion::V1_12],
            seeds: SeedSource::Fixed(&[5, 6]),
            coords: CoordSource::Offset {
                span: NonZeroU32::new(100).expect("100 is non-zero"),
            },
            sampling: Sampling { scale: 4, y: 0 },
            lifecycle: Lifecycle::PerSeed,
            flush_every: None,
        };
        let mut runner = Runner::new(FakeSource::default(), RunOptions::default());
        let mut out = Vec::new();
        let summary = runner.run(&plan, &mut out).expect("Plan should run");

        assert_eq!(summary.rows, plan.expected_rows(0));
        let text = String::from_utf8(out).expect("Rows should be UTF-8");
        let first = fields(text.lines().next().expect("At least one row"));
        // First draw from a zero state is the increment: 1442695040888963407 % 100 = 7.
        assert_eq!(&first[..3], &[15, 5, 7 - 50]);
        assert!(text
            .lines()
            .all(|l| fields(l)[2..4].iter().all(|c| (-50..50).contains(c))));
    }
}
