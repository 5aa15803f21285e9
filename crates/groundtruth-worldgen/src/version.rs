//! Game versions and dimensions understood by the generator.
//!
//! Discriminants are the cubiomes `MCVersion` / `Dimension` values. With the
//! `cubiomes` feature enabled they are checked against the library headers
//! at compile time, so the library's mapping is the one that ships.

use groundtruth_common::GroundTruthError;
use std::fmt;
use std::str::FromStr;

/// A game release the biome generator can emulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum McVersion {
    /// Beta 1.7
    B1_7 = 1,
    /// Beta 1.8
    B1_8 = 2,
    /// 1.0
    V1_0 = 3,
    /// 1.1
    V1_1 = 4,
    /// 1.2
    V1_2 = 5,
    /// 1.3
    V1_3 = 6,
    /// 1.4
    V1_4 = 7,
    /// 1.5
    V1_5 = 8,
    /// 1.6
    V1_6 = 9,
    /// 1.7
    V1_7 = 10,
    /// 1.8
    V1_8 = 11,
    /// 1.9
    V1_9 = 12,
    /// 1.10
    V1_10 = 13,
    /// 1.11
    V1_11 = 14,
    /// 1.12
    V1_12 = 15,
    /// 1.13
    V1_13 = 16,
    /// 1.14
    V1_14 = 17,
    /// 1.15
    V1_15 = 18,
    /// 1.16.1
    V1_16_1 = 19,
    /// 1.16
    V1_16 = 20,
    /// 1.17
    V1_17 = 21,
    /// 1.18
    V1_18 = 22,
    /// 1.19.2
    V1_19_2 = 23,
    /// 1.19
    V1_19 = 24,
    /// 1.20
    V1_20 = 25,
    /// 1.21.1
    V1_21_1 = 26,
    /// 1.21.3
    V1_21_3 = 27,
    /// 1.21 (Winter Drop), cubiomes' `MC_1_21`
    V1_21 = 28,
}

impl McVersion {
    /// Every version, oldest first.
    pub const ALL: [Self; 28] = [
        Self::B1_7,
        Self::B1_8,
        Self::V1_0,
        Self::V1_1,
        Self::V1_2,
        Self::V1_3,
        Self::V1_4,
        Self::V1_5,
        Self::V1_6,
        Self::V1_7,
        Self::V1_8,
        Self::V1_9,
        Self::V1_10,
        Self::V1_11,
        Self::V1_12,
        Self::V1_13,
        Self::V1_14,
        Self::V1_15,
        Self::V1_16_1,
        Self::V1_16,
        Self::V1_17,
        Self::V1_18,
        Self::V1_19_2,
        Self::V1_19,
        Self::V1_20,
        Self::V1_21_1,
        Self::V1_21_3,
        Self::V1_21,
    ];

    /// Integer code passed to `setupGenerator` and written in output rows.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Version for a cubiomes code.
    pub fn from_code(code: i32) -> Result<Self, GroundTruthError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.code() == code)
            .ok_or_else(|| GroundTruthError::UnknownVersion(code.to_string()))
    }

    /// Release label, e.g. `"Beta 1.7"` or `"1.16.1"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::B1_7 => "Beta 1.7",
            Self::B1_8 => "Beta 1.8",
            Self::V1_0 => "1.0",
            Self::V1_1 => "1.1",
            Self::V1_2 => "1.2",
            Self::V1_3 => "1.3",
            Self::V1_4 => "1.4",
            Self::V1_5 => "1.5",
            Self::V1_6 => "1.6",
            Self::V1_7 => "1.7",
            Self::V1_8 => "1.8",
            Self::V1_9 => "1.9",
            Self::V1_10 => "1.10",
            Self::V1_11 => "1.11",
            Self::V1_12 => "1.12",
            Self::V1_13 => "1.13",
            Self::V1_14 => "1.14",
            Self::V1_15 => "1.15",
            Self::V1_16_1 => "1.16.1",
            Self::V1_16 => "1.16",
            Self::V1_17 => "1.17",
            Self::V1_18 => "1.18",
            Self::V1_19_2 => "1.19.2",
            Self::V1_19 => "1.19",
            Self::V1_20 => "1.20",
            Self::V1_21_1 => "1.21.1",
            Self::V1_21_3 => "1.21.3",
            Self::V1_21 => "1.21",
        }
    }

    /// Beta releases, which use the pre-1.0 layer stack.
    #[must_use]
    pub const fn is_beta(self) -> bool {
        matches!(self, Self::B1_7 | Self::B1_8)
    }
}

impl fmt::Display for McVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for McVersion {
    type Err = GroundTruthError;

    /// Accepts `1.17`, `1_17`, `mc1.17`, `b1.7`, `beta 1.7`, `1.21 wd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase().replace('_', ".");
        let label = lower
            .strip_prefix("mc")
            .unwrap_or(&lower)
            .trim_start_matches(|c: char| c == '.' || c == ' ');
        let label = label.strip_suffix(" wd").unwrap_or(label);

        let beta = label
            .strip_prefix("beta")
            .or_else(|| label.strip_prefix('b'))
            .map(str::trim_start);

        Self::ALL
            .iter()
            .copied()
            .find(|v| match (beta, v.is_beta()) {
                (Some(rest), true) => v.name().strip_prefix("Beta ") == Some(rest),
                (None, false) => v.name() == label,
                _ => false,
            })
            .ok_or_else(|| GroundTruthError::UnknownVersion(s.to_string()))
    }
}

/// Dimension handed to `applySeed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Dimension {
    /// The Nether
    Nether = -1,
    /// The Overworld
    #[default]
    Overworld = 0,
    /// The End
    End = 1,
}

impl Dimension {
    /// Integer code passed to `applySeed`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

#[cfg(feature = "cubiomes")]
const _: () = {
    use cubiomes_sys as sys;
    assert!(McVersion::B1_7 as i32 == sys::MC_B1_7);
    assert!(McVersion::B1_8 as i32 == sys::MC_B1_8);
    assert!(McVersion::V1_0 as i32 == sys::MC_1_0);
    assert!(McVersion::V1_12 as i32 == sys::MC_1_12);
    assert!(McVersion::V1_16_1 as i32 == sys::MC_1_16_1);
    assert!(McVersion::V1_16 as i32 == sys::MC_1_16);
    assert!(McVersion::V1_17 as i32 == sys::MC_1_17);
    assert!(McVersion::V1_18 as i32 == sys::MC_1_18);
    assert!(McVersion::V1_19_2 as i32 == sys::MC_1_19_2);
    assert!(McVersion::V1_19 as i32 == sys::MC_1_19);
    assert!(McVersion::V1_20 as i32 == sys::MC_1_20);
    assert!(McVersion::V1_21_1 as i32 == sys::MC_1_21_1);
    assert!(McVersion::V1_21_3 as i32 == sys::MC_1_21_3);
    assert!(McVersion::V1_21 as i32 == sys::MC_1_21);
    assert!(Dimension::Nether as i32 == sys::DIM_NETHER);
    assert!(Dimension::Overworld as i32 == sys::DIM_OVERWORLD);
    assert!(Dimension::End as i32 == sys::DIM_END);
};
