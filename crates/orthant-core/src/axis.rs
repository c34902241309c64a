//! The fixed axis table.

use crate::direction::Direction;
use std::fmt;

/// Number of axes defined by the lattice.
pub const AXIS_COUNT: usize = 6;

/// One of the six movement axes.
///
/// The declaration order is the axis order used everywhere a
/// "dimension count" is taken: the first `n` axes of [`Axis::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// `Left` / `Right`.
    X,
    /// `Down` / `Up`.
    Y,
    /// `Backward` / `Forward`.
    Z,
    /// `Kata` / `Ana`.
    W,
    /// `VNeg` / `VPos`.
    V,
    /// `UNeg` / `UPos`.
    U,
}

impl Axis {
    /// Every axis, in table order.
    pub const ALL: [Axis; AXIS_COUNT] = [Axis::X, Axis::Y, Axis::Z, Axis::W, Axis::V, Axis::U];

    /// The first `dimensions` axes, clamped to the table length.
    pub fn first(dimensions: usize) -> &'static [Axis] {
        &Self::ALL[..dimensions.min(AXIS_COUNT)]
    }

    /// Position of this axis in [`Axis::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis's negative flag (bit `2 * index`).
    pub const fn negative(self) -> Direction {
        Direction::from_bits_truncate(1 << (2 * self.index()))
    }

    /// The axis's positive flag (bit `2 * index + 1`).
    pub const fn positive(self) -> Direction {
        Direction::from_bits_truncate(1 << (2 * self.index() + 1))
    }

    /// Both flags, negative first.
    pub const fn flags(self) -> [Direction; 2] {
        [self.negative(), self.positive()]
    }

    /// The axis a single flag belongs to.
    ///
    /// Returns `None` unless `direction` has exactly one flag set.
    pub fn of(direction: Direction) -> Option<Axis> {
        if direction.len() != 1 {
            return None;
        }
        let bit = direction.bits().trailing_zeros() as usize;
        Self::ALL.get(bit / 2).copied()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::W => "W",
            Self::V => "V",
            Self::U => "U",
        };
        f.write_str(name)
    }
}
