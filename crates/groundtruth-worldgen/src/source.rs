//! The seam between the suites and whatever computes biomes.

use crate::version::{Dimension, McVersion};

/// Generator flags for vanilla terrain (no large biomes, no overrides).
pub const NO_FLAGS: u32 = 0;

/// A biome generator driven the way cubiomes is: configure a version,
/// apply a seed, then query points.
///
/// Implementations must be deterministic: the same version, flags, seed,
/// and query always yield the same biome ID.
pub trait BiomeSource {
    /// Configure the generator for `version` (`setupGenerator`).
    fn setup(&mut self, version: McVersion, flags: u32);

    /// Initialize the configured generator for a world seed (`applySeed`).
    ///
    /// The seed is the bit pattern of the signed world seed.
    fn apply_seed(&mut self, dimension: Dimension, seed: u64);

    /// Biome ID at `(x, y, z)` in units of `scale` blocks (`getBiomeAt`).
    fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> i32;
}

impl<T: BiomeSource + ?Sized> BiomeSource for &mut T {
    fn setup(&mut self, version: McVersion, flags: u32) {
        (**self).setup(version, flags);
    }

    fn apply_seed(&mut self, dimension: Dimension, seed: u64) {
        (**self).apply_seed(dimension, seed);
    }

    fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> i32 {
        (**self).biome_at(scale, x, y, z)
    }
}

impl<T: BiomeSource + ?Sized> BiomeSource for Box<T> {
    fn setup(&mut self, version: McVersion, flags: u32) {
        (**self).setup(version, flags);
    }

    fn apply_seed(&mut self, dimension: Dimension, seed: u64) {
        (**self).apply_seed(dimension, seed);
    }

    fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> i32 {
        (**self).biome_at(scale, x, y, z)
    }
}
