//! Seed lists read from a plain-text file.
//!
//! The file holds whitespace-separated decimal 64-bit integers. Reading
//! stops at the cap, at end of file, or at the first token that is not a
//! number. Junk in the file is never an error; it just ends the list.

use crate::error::{GroundTruthError, GroundTruthResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default seed file, relative to the working directory.
pub const SEEDS_FILE: &str = "seeds.txt";

/// Maximum number of seeds read from a file.
pub const MAX_SEEDS: usize = 1000;

/// Parse up to `cap` seeds from `text`.
pub fn parse_seeds(text: &str, cap: usize) -> Vec<i64> {
    let mut seeds = Vec::with_capacity(cap.min(MAX_SEEDS));

    for token in text.split_whitespace() {
        if seeds.len() >= cap {
            break;
        }

        let digits = numeric_prefix(token);
        match digits.parse::<i64>() {
            Ok(seed) => seeds.push(seed),
            Err(_) => break,
        }

        // "12abc" yields 12, and the scan cannot get past "abc".
        if digits.len() < token.len() {
            break;
        }
    }

    seeds
}

/// Read up to `cap` seeds from the file at `path`.
///
/// Only failing to read the file is an error. Bytes that are not UTF-8
/// decode to `U+FFFD`, which is not a number and so ends the list.
pub fn read_seeds_file<P: AsRef<Path>>(path: P, cap: usize) -> GroundTruthResult<Vec<i64>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| GroundTruthError::SeedFile {
        path: path.to_path_buf(),
        source,
    })?;

    let seeds = parse_seeds(&String::from_utf8_lossy(&bytes), cap);
    debug!("Parsed {} seeds from {}", seeds.len(), path.display());
    Ok(seeds)
}

/// Longest leading `[+-]?[0-9]+` slice of `token`, or `""`.
fn numeric_prefix(token: &str) -> &str {
    let bytes = token.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        ""
    } else {
        &token[..sign + digits]
    }
}
