//! Safe generator wrapper around cubiomes.
//!
//! Owns one heap-allocated C `Generator` for its whole lifetime. Suites that
//! re-run `setup` per test case reuse the same allocation, which matches
//! what a stack `Generator` does in C.

use crate::source::BiomeSource;
use crate::version::{Dimension, McVersion};
use cubiomes_sys::*;
use groundtruth_common::{GroundTruthError, GroundTruthResult};
use std::ptr::NonNull;
use tracing::{debug, trace};

/// Safe wrapper around the cubiomes Generator.
pub struct CubiomesGenerator {
    /// Pointer to the C Generator struct.
    gen: NonNull<Generator>,
}

// SAFETY: The Generator is used single-threaded and the pointer is stable.
unsafe impl Send for CubiomesGenerator {}

impl CubiomesGenerator {
    /// Allocate an unconfigured generator.
    pub fn new() -> GroundTruthResult<Self> {
        // SAFETY: the helper returns either null or a zeroed Generator we own.
        let gen = NonNull::new(unsafe { cubiomes_generator_new() })
            .ok_or(GroundTruthError::GeneratorAlloc)?;
        debug!("Allocated cubiomes Generator ({} bytes)", unsafe {
            cubiomes_generator_size()
        });
        Ok(Self { gen })
    }
}

impl BiomeSource for CubiomesGenerator {
    fn setup(&mut self, version: McVersion, flags: u32) {
        unsafe { setupGenerator(self.gen.as_ptr(), version.code(), flags) };
        trace!(
            "Generator set up: mc={}, flags={}",
            mc_version_name(version.code()),
            flags
        );
    }

    fn apply_seed(&mut self, dimension: Dimension, seed: u64) {
        unsafe { applySeed(self.gen.as_ptr(), dimension.code(), seed) };
        trace!("Seed applied: dim={}, seed={}", dimension.code(), seed as i64);
    }

    fn biome_at(&self, scale: i32, x: i32, y: i32, z: i32) -> i32 {
        unsafe { getBiomeAt(self.gen.as_ptr(), scale, x, y, z) }
    }
}

impl Drop for CubiomesGenerator {
    fn drop(&mut self) {
        // SAFETY: allocated by cubiomes_generator_new and freed exactly once.
        unsafe { cubiomes_generator_free(self.gen.as_ptr()) };
    }
}
