//! Coordinate values and the coordinate lists shared by several suites.

/// Horizontal position passed to the generator as `(x, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// East/west
    pub x: i32,
    /// North/south
    pub z: i32,
}

impl Coord {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

/// World origin.
pub const ORIGIN: Coord = Coord::new(0, 0);

/// The "far" probe used by the two-column suites.
pub const FAR: Coord = Coord::new(5000, 5000);

/// Fixed probes: origin, near, and far in both diagonal directions.
pub const FIXED_COORDS: [Coord; 5] = [
    Coord::new(0, 0),
    Coord::new(100, 100),
    Coord::new(-100, -100),
    Coord::new(5000, 5000),
    Coord::new(-5000, -5000),
];

/// Five coordinate ranges cycled by test-case index.
///
/// Case `i` draws coordinates from `[-r, r]` with `r = tiers[i % 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeTiers(pub [u32; 5]);

impl RangeTiers {
    /// Near, medium, far, very far, extreme, for the Beta versions.
    pub const BETA: Self = Self([1000, 50_000, 500_000, 2_000_000, 5_000_000]);

    /// Near, medium, far, very far, extreme, for release versions.
    pub const DIVERSE: Self = Self([1000, 50_000, 500_000, 5_000_000, 10_000_000]);

    /// Range for the case at `index`.
    #[must_use]
    pub const fn range_for(&self, index: usize) -> u32 {
        self.0[index % 5]
    }
}
