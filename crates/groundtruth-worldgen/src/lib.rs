//! Biome sampling for the ground-truth generators.
//!
//! Defines the version and dimension types the suites enumerate, the
//! [`BiomeSource`] seam over the external generator API, and (with the
//! `cubiomes` feature) [`CubiomesGenerator`], a safe owner of a cubiomes
//! `Generator`.

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

#[cfg(feature = "cubiomes")]
pub mod generator;
pub mod source;
pub mod version;

#[cfg(feature = "cubiomes")]
pub use generator::CubiomesGenerator;
pub use source::{BiomeSource, NO_FLAGS};
pub use version::{Dimension, McVersion};
