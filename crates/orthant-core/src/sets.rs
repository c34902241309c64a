//! Direction-set generators over the leading axes of the table.
//!
//! All three generators take a dimension count `n` and operate on
//! [`Axis::first(n)`](Axis::first). Counts above [`AXIS_COUNT`](crate::AXIS_COUNT)
//! are clamped, so asking for more axes than exist yields every axis.

use crate::axis::Axis;
use crate::direction::Direction;

/// Dimension count used when a caller has no preference.
pub const DEFAULT_DIMENSIONS: usize = 2;

/// Single-axis directions: both flags of each of the first `dimensions` axes.
///
/// Axis-major, negative before positive: for 2 dimensions this is
/// `Left, Right, Down, Up`.
pub fn orthogonal(dimensions: usize) -> Vec<Direction> {
    Axis::first(dimensions)
        .iter()
        .flat_map(|axis| axis.flags())
        .collect()
}

/// Two-axis directions: one flag from each of two distinct axes.
///
/// For every axis pair `(i, j)` with `i < j`, and every flag `d1` of axis
/// `i` and `d2` of axis `j` (negative first), yields `d1 | d2`. The result
/// has `4 * C(n, 2)` entries and no duplicates.
pub fn diagonal(dimensions: usize) -> Vec<Direction> {
    let axes = Axis::first(dimensions);
    let mut out = Vec::with_capacity(Neighbourhood::Diagonal.len(dimensions));
    for (i, a) in axes.iter().enumerate() {
        for b in &axes[i + 1..] {
            for d1 in a.flags() {
                for d2 in b.flags() {
                    out.push(d1 | d2);
                }
            }
        }
    }
    out
}

/// Every non-empty choice of at most one flag per axis.
///
/// Depth-first over the axes: at each axis, every combination that skips
/// the axis comes before the combinations using its negative flag, which
/// come before those using its positive flag. Yields `3^n - 1` directions.
pub fn all(dimensions: usize) -> Vec<Direction> {
    let axes = Axis::first(dimensions);
    let mut out = Vec::with_capacity(Neighbourhood::All.len(dimensions) + 1);
    combine(axes, Direction::NONE, &mut out);
    out.retain(|d| !d.is_empty());
    out
}

fn combine(axes: &[Axis], acc: Direction, out: &mut Vec<Direction>) {
    let Some((axis, rest)) = axes.split_first() else {
        out.push(acc);
        return;
    };
    combine(rest, acc, out);
    for flag in axis.flags() {
        combine(rest, acc | flag, out);
    }
}

/// Which direction set a neighbourhood query walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Neighbourhood {
    /// One step along a single axis ([`orthogonal`]).
    #[default]
    Orthogonal,
    /// One step along exactly two axes ([`diagonal`]).
    Diagonal,
    /// Every combination of at most one step per axis ([`all`]).
    All,
}

impl Neighbourhood {
    /// Generate the directions of this neighbourhood over `dimensions` axes.
    pub fn directions(self, dimensions: usize) -> Vec<Direction> {
        match self {
            Self::Orthogonal => orthogonal(dimensions),
            Self::Diagonal => diagonal(dimensions),
            Self::All => all(dimensions),
        }
    }

    /// Number of directions [`directions`](Self::directions) yields.
    pub fn len(self, dimensions: usize) -> usize {
        let n = dimensions.min(crate::AXIS_COUNT);
        match self {
            Self::Orthogonal => 2 * n,
            Self::Diagonal => 2 * n * n.saturating_sub(1),
            Self::All => 3usize.pow(n as u32) - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AXIS_COUNT;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn binomial2(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }

    // ── Orthogonal ──────────────────────────────────────────────

    #[test]
    fn orthogonal_default_order() {
        assert_eq!(
            orthogonal(DEFAULT_DIMENSIONS),
            vec![Direction::LEFT, Direction::RIGHT, Direction::DOWN, Direction::UP]
        );
    }

    #[test]
    fn orthogonal_zero_and_clamped() {
        assert!(orthogonal(0).is_empty());
        assert_eq!(orthogonal(100), orthogonal(AXIS_COUNT));
        assert_eq!(orthogonal(AXIS_COUNT).len(), 12);
    }

    // ── Diagonal ────────────────────────────────────────────────

    #[test]
    fn diagonal_two_dimensions() {
        assert_eq!(
            diagonal(2),
            vec![
                Direction::LEFT | Direction::DOWN,
                Direction::LEFT | Direction::UP,
                Direction::RIGHT | Direction::DOWN,
                Direction::RIGHT | Direction::UP,
            ]
        );
    }

    #[test]
    fn diagonal_three_dimensions_pair_order() {
        let d = diagonal(3);
        assert_eq!(d.len(), 12);
        // (X, Y) block, then (X, Z), then (Y, Z).
        assert_eq!(d[0], Direction::LEFT | Direction::DOWN);
        assert_eq!(d[4], Direction::LEFT | Direction::BACKWARD);
        assert_eq!(d[8], Direction::DOWN | Direction::BACKWARD);
        assert_eq!(d[11], Direction::UP | Direction::FORWARD);
    }

    #[test]
    fn diagonal_below_two_is_empty() {
        assert!(diagonal(0).is_empty());
        assert!(diagonal(1).is_empty());
    }

    // ── All ─────────────────────────────────────────────────────

    #[test]
    fn all_one_dimension() {
        assert_eq!(all(1), vec![Direction::LEFT, Direction::RIGHT]);
    }

    #[test]
    fn all_two_dimensions_depth_first() {
        assert_eq!(
            all(2),
            vec![
                Direction::DOWN,
                Direction::UP,
                Direction::LEFT,
                Direction::LEFT | Direction::DOWN,
                Direction::LEFT | Direction::UP,
                Direction::RIGHT,
                Direction::RIGHT | Direction::DOWN,
                Direction::RIGHT | Direction::UP,
            ]
        );
    }

    #[test]
    fn all_zero_dimensions_is_empty() {
        assert!(all(0).is_empty());
    }

    // ── Neighbourhood ───────────────────────────────────────────

    #[test]
    fn neighbourhood_dispatch() {
        assert_eq!(Neighbourhood::default(), Neighbourhood::Orthogonal);
        assert_eq!(Neighbourhood::Orthogonal.directions(3), orthogonal(3));
        assert_eq!(Neighbourhood::Diagonal.directions(3), diagonal(3));
        assert_eq!(Neighbourhood::All.directions(3), all(3));
    }

    #[test]
    fn neighbourhood_len_matches_generators() {
        for n in 0..=AXIS_COUNT + 1 {
            for hood in [
                Neighbourhood::Orthogonal,
                Neighbourhood::Diagonal,
                Neighbourhood::All,
            ] {
                assert_eq!(hood.len(n), hood.directions(n).len(), "{hood:?} n={n}");
            }
        }
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn orthogonal_two_per_axis(n in 0usize..=AXIS_COUNT) {
            let dirs = orthogonal(n);
            prop_assert_eq!(dirs.len(), 2 * n);
            for (i, pair) in dirs.chunks(2).enumerate() {
                let expected = Axis::ALL[i].flags();
                prop_assert_eq!(pair, &expected[..]);
            }
        }

        #[test]
        fn diagonal_spans_two_distinct_axes(n in 0usize..=AXIS_COUNT) {
            let dirs = diagonal(n);
            prop_assert_eq!(dirs.len(), 4 * binomial2(n));
            for d in &dirs {
                let axes: Vec<Axis> = d.flags().filter_map(Axis::of).collect();
                prop_assert_eq!(axes.len(), 2);
                prop_assert!(axes[0] != axes[1]);
                prop_assert!(axes.iter().all(|a| a.index() < n));
            }
            let unique: HashSet<_> = dirs.iter().collect();
            prop_assert_eq!(unique.len(), dirs.len());
        }

        #[test]
        fn all_one_flag_per_axis(n in 0usize..=AXIS_COUNT) {
            let dirs = all(n);
            prop_assert_eq!(dirs.len(), 3usize.pow(n as u32) - 1);
            for d in &dirs {
                prop_assert!(!d.is_empty());
                for axis in Axis::ALL {
                    let used = axis.flags().iter().filter(|f| d.contains(**f)).count();
                    prop_assert!(used <= 1);
                    if axis.index() >= n {
                        prop_assert_eq!(used, 0);
                    }
                }
            }
            let unique: HashSet<_> = dirs.iter().collect();
            prop_assert_eq!(unique.len(), dirs.len());
        }
    }
}
