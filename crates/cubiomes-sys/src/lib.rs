//! Raw FFI bindings to the cubiomes C library.
//!
//! This crate compiles the cubiomes C source and provides unsafe FFI functions
//! for Minecraft biome generation. Use `groundtruth-worldgen` for a safe wrapper.
//!
//! Only the part of the API the ground-truth suites call is declared here.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]

use std::os::raw::{c_char, c_int, c_uint};

// ============================================================================
// Opaque Generator type
// ============================================================================

/// Opaque Generator struct. Must be heap-allocated via `cubiomes_generator_new`.
#[repr(C)]
pub struct Generator {
    _opaque: [u8; 0], // Actual size determined at runtime; always heap-allocated via C helper
}

// ============================================================================
// MCVersion enum
// ============================================================================

pub const MC_UNDEF: c_int = 0;
pub const MC_B1_7: c_int = 1;
pub const MC_B1_8: c_int = 2;
pub const MC_1_0: c_int = 3;
pub const MC_1_1: c_int = 4;
pub const MC_1_2: c_int = 5;
pub const MC_1_3: c_int = 6;
pub const MC_1_4: c_int = 7;
pub const MC_1_5: c_int = 8;
pub const MC_1_6: c_int = 9;
pub const MC_1_7: c_int = 10;
pub const MC_1_8: c_int = 11;
pub const MC_1_9: c_int = 12;
pub const MC_1_10: c_int = 13;
pub const MC_1_11: c_int = 14;
pub const MC_1_12: c_int = 15;
pub const MC_1_13: c_int = 16;
pub const MC_1_14: c_int = 17;
pub const MC_1_15: c_int = 18;
pub const MC_1_16_1: c_int = 19;
pub const MC_1_16: c_int = 20;
pub const MC_1_17: c_int = 21;
pub const MC_1_18: c_int = 22;
pub const MC_1_19_2: c_int = 23;
pub const MC_1_19: c_int = 24;
pub const MC_1_20: c_int = 25;
pub const MC_1_21_1: c_int = 26;
pub const MC_1_21_3: c_int = 27;
pub const MC_1_21_WD: c_int = 28;
pub const MC_1_21: c_int = MC_1_21_WD;
pub const MC_NEWEST: c_int = MC_1_21;

// ============================================================================
// Dimension enum
// ============================================================================

pub const DIM_NETHER: c_int = -1;
pub const DIM_OVERWORLD: c_int = 0;
pub const DIM_END: c_int = 1;

/// Returned by `getBiomeAt` when no biome can be produced.
pub const BIOME_NONE: c_int = -1;

// ============================================================================
// FFI function declarations
// ============================================================================

extern "C" {
    // --- Generator lifecycle (via helper) ---

    /// Allocate a new zeroed Generator on the heap. Returns null on failure.
    pub fn cubiomes_generator_new() -> *mut Generator;

    /// Free a heap-allocated Generator.
    pub fn cubiomes_generator_free(g: *mut Generator);

    /// Get sizeof(Generator).
    pub fn cubiomes_generator_size() -> usize;

    /// Get mc version from generator.
    pub fn cubiomes_generator_get_mc(g: *const Generator) -> c_int;

    /// Get seed from generator.
    pub fn cubiomes_generator_get_seed(g: *const Generator) -> u64;

    /// Get dimension from generator.
    pub fn cubiomes_generator_get_dim(g: *const Generator) -> c_int;

    // --- Core cubiomes API ---

    /// Setup a biome generator for a given MC version.
    pub fn setupGenerator(g: *mut Generator, mc: c_int, flags: c_uint);

    /// Initialize the generator for a given dimension and seed.
    pub fn applySeed(g: *mut Generator, dim: c_int, seed: u64);

    /// Get biome at a specific scaled position.
    pub fn getBiomeAt(g: *const Generator, scale: c_int, x: c_int, y: c_int, z: c_int) -> c_int;

    // --- Utility ---

    /// Convert MC version to string.
    pub fn mc2str(mc: c_int) -> *const c_char;
}

// ============================================================================
// Safe helpers
// ============================================================================

/// Get MC version name as a Rust string.
pub fn mc_version_name(mc: c_int) -> String {
    unsafe {
        let ptr = mc2str(mc);
        if ptr.is_null() {
            return format!("unknown_mc_{}", mc);
        }
        std::ffi::CStr::from_ptr(ptr)
            .to_string_lossy()
            .into_owned()
    }
}
