//! Moves (direction plus length) and the walks they generate.

use crate::coord::Coord;
use crate::direction::Direction;
use std::fmt;
use std::iter::FusedIterator;

/// A direction paired with a step length.
///
/// Immutable; the displacement it stands for is recomputed by
/// [`vector`](Self::vector) on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    direction: Direction,
    length: u32,
}

impl Move {
    /// Create a move of `length` steps along `direction`.
    pub const fn new(direction: Direction, length: u32) -> Self {
        Self { direction, length }
    }

    /// A single step along `direction`.
    pub const fn unit(direction: Direction) -> Self {
        Self::new(direction, 1)
    }

    /// The direction of travel.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of steps.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// The same length in the opposite direction.
    pub const fn reversed(&self) -> Self {
        Self::new(self.direction.opposite(), self.length)
    }

    /// The displacement this move produces.
    ///
    /// The result has [`Direction::axis_count`] components: at least 2,
    /// enough to reach the highest flag set. On each axis the negative flag
    /// subtracts `length` and the positive flag adds it; an axis with both
    /// flags set nets to zero.
    ///
    /// ```
    /// use orthant_core::{Coord, Direction, Move};
    ///
    /// assert_eq!(Move::new(Direction::LEFT, 3).vector().as_slice(), &[-3, 0]);
    /// assert_eq!(Move::new(Direction::ANA, 1).vector().as_slice(), &[0, 0, 0, 1]);
    /// assert_eq!(Move::new(Direction::NONE, 7).vector(), Coord::zeros(2));
    /// ```
    pub fn vector(&self) -> Coord {
        let bits = self.direction.bits();
        let length = i64::from(self.length);
        (0..self.direction.axis_count())
            .map(|axis| {
                let mut v = 0;
                if bits >> (2 * axis) & 1 == 1 {
                    v -= length;
                }
                if bits >> (2 * axis + 1) & 1 == 1 {
                    v += length;
                }
                v
            })
            .collect()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.direction, self.length)
    }
}

impl Direction {
    /// Pair this direction with a step length.
    pub const fn to_move(self, length: u32) -> Move {
        Move::new(self, length)
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        Move::unit(direction)
    }
}

impl Coord {
    /// This coordinate displaced by `mv`.
    pub fn offset(&self, mv: &Move) -> Coord {
        self + &mv.vector()
    }

    /// Endless walk from this coordinate, one `mv` at a time.
    ///
    /// The start itself is not yielded. Bound the walk with `take`,
    /// `take_while` or similar.
    pub fn walk(&self, mv: Move) -> Walk {
        Walk {
            current: self.clone(),
            step: mv.vector(),
        }
    }
}

/// Infinite iterator of coordinates produced by [`Coord::walk`].
///
/// Each position is computed only when it is requested.
#[derive(Clone, Debug)]
pub struct Walk {
    /// Last yielded position, or the start before the first item.
    current: Coord,
    step: Coord,
}

impl Walk {
    /// The displacement applied between consecutive items.
    pub fn step(&self) -> &Coord {
        &self.step
    }
}

impl Iterator for Walk {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        self.current += &self.step;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Walk {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sets;
    use proptest::prelude::*;

    // ── Vector ──────────────────────────────────────────────────

    #[test]
    fn none_is_two_dimensional_zero() {
        for k in [0, 1, 9] {
            let v = Move::new(Direction::NONE, k).vector();
            assert_eq!(v.dimension(), 2);
            assert!(v.is_origin());
        }
    }

    #[test]
    fn single_flag_vectors() {
        assert_eq!(Move::new(Direction::LEFT, 3).vector(), Coord::from([-3, 0]));
        assert_eq!(Move::new(Direction::UP, 1).vector(), Coord::from([0, 1]));
        assert_eq!(Move::new(Direction::FORWARD, 2).vector().as_slice(), &[0, 0, 2]);
    }

    #[test]
    fn diagonal_vector() {
        let v = Move::new(Direction::LEFT | Direction::UP, 2).vector();
        assert_eq!(v, Coord::from([-2, 2]));
    }

    #[test]
    fn ana_reaches_fourth_axis() {
        let v = Move::unit(Direction::ANA).vector();
        assert!(v.dimension() >= 4);
        assert_eq!(v[3], 1);
        assert_eq!(Move::unit(Direction::KATA).vector()[3], -1);
    }

    #[test]
    fn u_axis_uses_all_six() {
        let v = Move::new(Direction::U_POS | Direction::LEFT, 4).vector();
        assert_eq!(v.as_slice(), &[-4, 0, 0, 0, 0, 4]);
    }

    #[test]
    fn contradictory_flags_cancel() {
        let v = Move::new(Direction::LEFT | Direction::RIGHT | Direction::UP, 5).vector();
        assert_eq!(v.as_slice(), &[0, 5]);
    }

    #[test]
    fn reversed_negates_vector() {
        let mv = Move::new(Direction::RIGHT | Direction::DOWN | Direction::ANA, 3);
        assert_eq!(mv.reversed().vector(), -mv.vector());
    }

    #[test]
    fn display() {
        assert_eq!(Move::new(Direction::LEFT | Direction::UP, 2).to_string(), "Left | Up x2");
    }

    // ── Walk ────────────────────────────────────────────────────

    #[test]
    fn walk_right_from_origin() {
        let steps: Vec<Coord> = Coord::origin().walk(Direction::RIGHT.to_move(1)).take(3).collect();
        assert_eq!(steps, vec![Coord::from([1, 0]), Coord::from([2, 0]), Coord::from([3, 0])]);
    }

    #[test]
    fn walk_is_bounded_by_consumer() {
        let start = Coord::from([10, 10]);
        let inside: Vec<Coord> = start
            .walk(Move::new(Direction::DOWN | Direction::LEFT, 4))
            .take_while(|c| c.x() >= 0 && c.y() >= 0)
            .collect();
        assert_eq!(inside.last(), Some(&Coord::from([2, 2])));
        assert_eq!(inside.len(), 2);
    }

    #[test]
    fn offset_matches_first_walk_step() {
        let start = Coord::from([1, 2, 3]);
        let mv = Move::unit(Direction::BACKWARD);
        assert_eq!(start.walk(mv).next(), Some(start.offset(&mv)));
    }

    #[test]
    fn walk_stops_computing_at_the_last_taken_position() {
        let start = Coord::from([i64::MAX - 2, 0]);
        let steps: Vec<Coord> = start.walk(Move::unit(Direction::RIGHT)).take(2).collect();
        assert_eq!(steps, vec![Coord::from([i64::MAX - 1, 0]), Coord::from([i64::MAX, 0])]);
    }

    proptest! {
        #[test]
        fn vector_norm_matches_flag_count(n in 0usize..=6, idx in 0usize..728, len in 0u32..20) {
            let dirs = sets::all(n);
            prop_assume!(!dirs.is_empty());
            let d = dirs[idx % dirs.len()];
            let v = Move::new(d, len).vector();
            prop_assert_eq!(v.manhattan(), u64::from(d.len()) * u64::from(len));
            prop_assert!(v.dimension() >= 2);
            prop_assert_eq!(v.dimension(), d.axis_count());
        }
    }
}
