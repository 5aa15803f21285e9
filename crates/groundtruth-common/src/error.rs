//! Error types for the ground-truth generators.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for ground-truth operations.
#[derive(Debug, Error)]
pub enum GroundTruthError {
    /// The seed file could not be opened or read.
    #[error("Could not open {}: {}", .path.display(), .source)]
    SeedFile {
        /// Path that was tried
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// IO errors while writing rows
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A version label or code that the generator does not know.
    #[error("Unknown version: {0}")]
    UnknownVersion(String),

    /// The external library failed to allocate a generator.
    #[error("Failed to allocate cubiomes Generator")]
    GeneratorAlloc,

    /// Built without a biome backend.
    #[error("No biome backend: rebuild with the `cubiomes` feature")]
    BackendUnavailable,
}

/// Result type alias for ground-truth operations.
pub type GroundTruthResult<T> = Result<T, GroundTruthError>;
