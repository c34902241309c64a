//! The [`Direction`] bitmask and its flag iterator.

use crate::axis::AXIS_COUNT;
use crate::error::ParseDirectionError;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, Not};
use std::str::FromStr;

/// Names of the single flags, indexed by bit position.
const FLAG_NAMES: [&str; 12] = [
    "Left", "Right", "Down", "Up", "Backward", "Forward", "Kata", "Ana", "VNeg", "VPos", "UNeg",
    "UPos",
];

/// A movement direction, stored as a bitmask of per-axis flags.
///
/// Axis `a` owns bit `2a` (its negative flag) and bit `2a + 1` (its
/// positive flag), for the six axes X, Y, Z, W, V, U. Any union of flags
/// is a valid value: `LEFT | UP` is a diagonal, and even the contradictory
/// `LEFT | RIGHT` is accepted (it nets out to no displacement on X).
///
/// Bits above the twelfth are never set; constructors and operators mask
/// them off.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Direction(u16);

impl Direction {
    /// Number of defined flags (two per axis).
    pub const FLAG_COUNT: u32 = (AXIS_COUNT * 2) as u32;

    /// Mask of every defined flag.
    pub const MASK: u16 = (1 << Self::FLAG_COUNT) - 1;

    /// No displacement.
    pub const NONE: Self = Self(0);

    /// X axis, negative.
    pub const LEFT: Self = Self(1 << 0);
    /// X axis, positive.
    pub const RIGHT: Self = Self(1 << 1);
    /// Y axis, negative.
    pub const DOWN: Self = Self(1 << 2);
    /// Y axis, positive.
    pub const UP: Self = Self(1 << 3);
    /// Z axis, negative.
    pub const BACKWARD: Self = Self(1 << 4);
    /// Z axis, positive.
    pub const FORWARD: Self = Self(1 << 5);
    /// W axis, negative.
    pub const KATA: Self = Self(1 << 6);
    /// W axis, positive.
    pub const ANA: Self = Self(1 << 7);
    /// V axis, negative.
    pub const V_NEG: Self = Self(1 << 8);
    /// V axis, positive.
    pub const V_POS: Self = Self(1 << 9);
    /// U axis, negative.
    pub const U_NEG: Self = Self(1 << 10);
    /// U axis, positive.
    pub const U_POS: Self = Self(1 << 11);

    /// Raw bit pattern.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Build a direction from raw bits.
    ///
    /// Returns `None` if any bit outside the twelve defined flags is set.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        if bits & !Self::MASK != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Build a direction from raw bits, dropping undefined bits.
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    /// Returns `true` if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every flag of `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if `self` and `other` share at least one flag.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of flags set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the highest set bit, or `None` for [`Direction::NONE`].
    pub const fn highest_set_bit(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(u16::BITS - 1 - self.0.leading_zeros())
        }
    }

    /// Dimensionality of the displacement this direction produces.
    ///
    /// Enough axes to cover the highest set flag, never fewer than 2 and
    /// never more than [`AXIS_COUNT`]. Assumes two contiguous bits per axis.
    pub fn axis_count(self) -> usize {
        let covered = match self.highest_set_bit() {
            None => 2,
            Some(bit) => bit as usize / 2 + 1,
        };
        covered.min(AXIS_COUNT).max(2)
    }

    /// The same direction with every axis flipped.
    ///
    /// Each set negative flag becomes the axis's positive flag and vice
    /// versa. A contradictory pair (both flags of one axis) maps to itself.
    pub const fn opposite(self) -> Self {
        const NEGATIVE: u16 = 0b0101_0101_0101;
        const POSITIVE: u16 = NEGATIVE << 1;
        Self(((self.0 & NEGATIVE) << 1) | ((self.0 & POSITIVE) >> 1))
    }

    /// Iterate over the single flags set in this direction, lowest bit first.
    pub fn flags(self) -> DirectionFlags {
        DirectionFlags { remaining: self.0 }
    }

    /// Name of a single flag, or `None` if `self` is not exactly one flag.
    pub fn name(self) -> Option<&'static str> {
        if self.0.count_ones() != 1 {
            return None;
        }
        Some(FLAG_NAMES[self.0.trailing_zeros() as usize])
    }
}

impl BitOr for Direction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Direction {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Direction {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Direction {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitXor for Direction {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::MASK)
    }
}

impl FromIterator<Direction> for Direction {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |acc, d| acc | d)
    }
}

impl IntoIterator for Direction {
    type Item = Direction;
    type IntoIter = DirectionFlags;

    fn into_iter(self) -> Self::IntoIter {
        self.flags()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        for (i, flag) in self.flags().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(FLAG_NAMES[flag.0.trailing_zeros() as usize])?;
        }
        Ok(())
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({self})")
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse the [`Display`](fmt::Display) form: flag names separated by `|`.
    ///
    /// Names are matched case-insensitively; `"None"` is the empty direction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseDirectionError::Empty);
        }
        let mut out = Self::NONE;
        for token in s.split('|') {
            let token = token.trim();
            if token.eq_ignore_ascii_case("none") {
                continue;
            }
            let bit = FLAG_NAMES
                .iter()
                .position(|name| name.eq_ignore_ascii_case(token))
                .ok_or_else(|| ParseDirectionError::UnknownFlag {
                    token: token.to_string(),
                })?;
            out |= Self(1 << bit);
        }
        Ok(out)
    }
}

/// Iterator over the single flags of a [`Direction`], in ascending bit order.
#[derive(Clone, Debug)]
pub struct DirectionFlags {
    remaining: u16,
}

impl Iterator for DirectionFlags {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let lowest = self.remaining & self.remaining.wrapping_neg();
        self.remaining &= !lowest;
        Some(Direction(lowest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DirectionFlags {}
