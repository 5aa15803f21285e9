//! # Groundtruth Common
//!
//! Common types and utilities for the biome ground-truth generators.
//!
//! This crate provides the values every suite is built from:
//! - The 64-bit linear congruential generator used to synthesize inputs
//! - Seed-file reading
//! - Coordinate sources
//! - Output rows
//! - Common error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod lcg;
pub mod row;
pub mod seeds;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::lcg::*;
    pub use crate::row::*;
    pub use crate::seeds::*;
}

pub use prelude::*;
