//! Output rows.
//!
//! One row per test case, fields separated by single spaces, no header.

use std::fmt;

/// A single line of ground-truth output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// `<version> <seed> <x> <z> <biome>`
    Point {
        /// Version code
        version: i32,
        /// World seed
        seed: i64,
        /// Probe X
        x: i32,
        /// Probe Z
        z: i32,
        /// Biome ID at the probe
        biome: i32,
    },
    /// `<version> <seed> <origin> <far>`
    Pair {
        /// Version code
        version: i32,
        /// World seed
        seed: i64,
        /// Biome ID at the origin
        origin: i32,
        /// Biome ID at the far probe
        far: i32,
    },
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Point {
                version,
                seed,
                x,
                z,
                biome,
            } => write!(f, "{version} {seed} {x} {z} {biome}"),
            Self::Pair {
                version,
                seed,
                origin,
                far,
            } => write!(f, "{version} {seed} {origin} {far}"),
        }
    }
}
