//! Suite catalogue.
//!
//! Each suite is a [`SuitePlan`]: plain data saying which versions, seeds,
//! and probes to enumerate. The [`crate::runner`] turns a plan into rows.

use groundtruth_common::{Coord, RangeTiers, FIXED_COORDS};
use groundtruth_worldgen::McVersion;
use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};

/// Where the seeds of each test case come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// The same list for every version.
    Fixed(&'static [i64]),
    /// `per_version` draws from one LCG started at `start` and shared by
    /// every version of the run.
    Lcg {
        /// Initial LCG state
        start: u64,
        /// Cases generated for each version
        per_version: usize,
    },
    /// Seeds read from the seed file.
    File,
}

/// Which probes are sampled for each seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordSource {
    /// One `Point` row per listed coordinate.
    Fixed(&'static [Coord]),
    /// One `Pair` row sampling the origin and the far probe.
    OriginFar,
    /// One `Point` row with `x` then `z` drawn as LCG offsets over `span`.
    Offset {
        /// Width of the offset interval
        span: NonZeroU32,
    },
    /// One `Point` row with `x` then `z` drawn from `[-r, r]`, `r` picked
    /// by case index.
    Tiered(RangeTiers),
}

impl CoordSource {
    /// Rows written per seed.
    #[must_use]
    pub const fn rows_per_seed(&self) -> usize {
        match self {
            Self::Fixed(coords) => coords.len(),
            Self::OriginFar | Self::Offset { .. } | Self::Tiered(_) => 1,
        }
    }
}

/// When `setupGenerator` is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Setup and seed the generator afresh for every seed.
    PerSeed,
    /// Setup once per version; only `applySeed` runs per seed.
    PerVersion,
}

/// Block-resolution parameters of every `getBiomeAt` call in a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampling {
    /// 1 for block coordinates, 4 for biome cells
    pub scale: i32,
    /// Vertical coordinate, in units of `scale`
    pub y: i32,
}

/// Everything needed to enumerate one suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitePlan {
    /// Versions, in output order.
    pub versions: &'static [McVersion],
    /// Seed enumeration.
    pub seeds: SeedSource,
    /// Probe enumeration.
    pub coords: CoordSource,
    /// Scale and height of every query.
    pub sampling: Sampling,
    /// Generator setup policy.
    pub lifecycle: Lifecycle,
    /// Flush output after every seed whose index is a multiple of this.
    pub flush_every: Option<NonZeroUsize>,
}

impl SuitePlan {
    /// Seeds processed per version, given `file_seeds` seeds in the seed file.
    #[must_use]
    pub const fn seeds_per_version(&self, file_seeds: usize) -> usize {
        match self.seeds {
            SeedSource::Fixed(seeds) => seeds.len(),
            SeedSource::Lcg { per_version, .. } => per_version,
            SeedSource::File => file_seeds,
        }
    }

    /// Total rows the plan writes, given `file_seeds` seeds in the seed file.
    #[must_use]
    pub const fn expected_rows(&self, file_seeds: usize) -> usize {
        self.versions.len() * self.seeds_per_version(file_seeds) * self.coords.rows_per_seed()
    }

    /// Whether the plan reads the seed file.
    #[must_use]
    pub const fn needs_seed_file(&self) -> bool {
        matches!(self.seeds, SeedSource::File)
    }
}

/// Seeds used by the `fixed` suite.
pub const FIXED_SEEDS: [i64; 10] = [
    0,
    1,
    12345,
    -1,
    123_456_789_012_345,
    -987_654_321,
    1_234_567_890_123_456_789,
    -1_234_567_890_123_456_789,
    42,
    999_999_999_999,
];

use McVersion::*;

/// 1.17 down to 1.0.
const RELEASES_DESCENDING: [McVersion; 18] = [
    V1_17, V1_16, V1_15, V1_14, V1_13, V1_12, V1_11, V1_10, V1_9, V1_8, V1_7, V1_6, V1_5, V1_4,
    V1_3, V1_2, V1_1, V1_0,
];

/// 1.0 up to 1.17, including 1.16.1.
const RELEASES_ASCENDING: [McVersion; 19] = [
    V1_0, V1_1, V1_2, V1_3, V1_4, V1_5, V1_6, V1_7, V1_8, V1_9, V1_10, V1_11, V1_12, V1_13,
    V1_14, V1_15, V1_16_1, V1_16, V1_17,
];

/// Beta 1.7 up to 1.17.
const LAYERED: [McVersion; 21] = [
    B1_7, B1_8, V1_0, V1_1, V1_2, V1_3, V1_4, V1_5, V1_6, V1_7, V1_8, V1_9, V1_10, V1_11, V1_12,
    V1_13, V1_14, V1_15, V1_16_1, V1_16, V1_17,
];

const BETA: [McVersion; 2] = [B1_7, B1_8];

/// Noise-router versions.
const MODERN: [McVersion; 5] = [V1_18, V1_19_2, V1_19, V1_20, V1_21];

const FIXED_PROBES: &[Coord] = &FIXED_COORDS;

/// Offset span of the `random` suite, giving `[-10M, 10M)`.
const RANDOM_SPAN: NonZeroU32 = match NonZeroU32::new(20_000_000) {
    Some(span) => span,
    None => unreachable!(),
};

/// The ground-truth data sets this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Suite {
    /// Ten fixed seeds at five fixed probes, 1.17 down to 1.0.
    Fixed,
    /// 100 random seeds per version at random probes within 10M blocks.
    Random,
    /// 5000 random seeds per version, origin and far probe, Beta 1.7 to 1.17.
    Versions,
    /// 5000 random seeds per Beta version at tiered random probes.
    Beta,
    /// 5263 random seeds per release version at tiered random probes.
    Diverse,
    /// Seed-file seeds on 1.18+, origin and far probe at y=64.
    Modern,
    /// Seed-file seeds on Beta, five fixed probes at block scale.
    Legacy,
}

impl Suite {
    /// Every suite, in listing order.
    pub const ALL: [Self; 7] = [
        Self::Fixed,
        Self::Random,
        Self::Versions,
        Self::Beta,
        Self::Diverse,
        Self::Modern,
        Self::Legacy,
    ];

    /// CLI name of the suite.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Random => "random",
            Self::Versions => "versions",
            Self::Beta => "beta",
            Self::Diverse => "diverse",
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }

    /// The enumeration this suite performs.
    #[must_use]
    pub const fn plan(self) -> SuitePlan {
        const BIOME_CELLS: Sampling = Sampling { scale: 4, y: 0 };

        match self {
            Self::Fixed => SuitePlan {
                versions: &RELEASES_DESCENDING,
                seeds: SeedSource::Fixed(&FIXED_SEEDS),
                coords: CoordSource::Fixed(FIXED_PROBES),
                sampling: BIOME_CELLS,
                lifecycle: Lifecycle::PerSeed,
                flush_every: None,
            },
            Self::Random => SuitePlan {
                versions: &RELEASES_DESCENDING,
                seeds: SeedSource::Lcg {
                    start: 987_654_321,
                    per_version: 100,
                },
                coords: CoordSource::Offset { span: RANDOM_SPAN },
                sampling: BIOME_CELLS,
                lifecycle: Lifecycle::PerSeed,
                flush_every: None,
            },
            Self::Versions => SuitePlan {
                versions: &LAYERED,
                seeds: SeedSource::Lcg {
                    start: 123_456_789,
                    per_version: 5000,
                },
                coords: CoordSource::OriginFar,
                sampling: BIOME_CELLS,
                lifecycle: Lifecycle::PerSeed,
                flush_every: None,
            },
            Self::Beta => SuitePlan {
                versions: &BETA,
                seeds: SeedSource::Lcg {
                    start: 0xBE7A_1234_5678,
                    per_version: 5000,
                },
                coords: CoordSource::Tiered(RangeTiers::BETA),
                sampling: BIOME_CELLS,
                lifecycle: Lifecycle::PerSeed,
                flush_every: None,
            },
            Self::Diverse => SuitePlan {
                versions: &RELEASES_ASCENDING,
                seeds: SeedSource::Lcg {
                    start: 0xDEAD_BEEF_1234_5678,
                    per_version: 5263,
                },
                coords: CoordSource::Tiered(RangeTiers::DIVERSE),
                sampling: BIOME_CELLS,
                lifecycle: Lifecycle::PerSeed,
                flush_every: None,
            },
            Self::Modern => SuitePlan {
                versions: &MODERN,
                seeds: SeedSource::File,
                coords: CoordSource::OriginFar,
                sampling: Sampling { scale: 4, y: 64 },
                lifecycle: Lifecycle::PerVersion,
                flush_every: NonZeroUsize::new(200),
            },
            Self::Legacy => SuitePlan {
                versions: &BETA,
                seeds: SeedSource::File,
                coords: CoordSource::Fixed(FIXED_PROBES),
                sampling: Sampling { scale: 1, y: 64 },
                lifecycle: Lifecycle::PerVersion,
                flush_every: NonZeroUsize::new(100),
            },
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
