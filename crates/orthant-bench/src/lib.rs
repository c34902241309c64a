//! Benchmark profiles for the Orthant lattice crates.
//!
//! - [`terrain_profile`]: square height-map puzzle with deterministic terrain
//! - [`coord_pairs`]: deterministic coordinate pairs of mixed dimensionality

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use orthant_core::Coord;
use orthant_grid::Grid;
use orthant_puzzle::Marker;

/// Build a `side` x `side` puzzle whose heights follow a cheap LCG.
///
/// Heights are in `0..4`, so roughly half of all orthogonal steps are
/// walkable. Corner `(0, 0)` is the start, the opposite corner the end.
pub fn terrain_profile(side: usize, seed: u64) -> Grid<Marker> {
    let last = side.saturating_sub(1);
    Grid::from_rows((0..side).map(|y| {
        (0..side)
            .map(|x| {
                let marker = if (x, y) == (0, 0) {
                    Marker::Start
                } else if (x, y) == (last, last) {
                    Marker::End
                } else {
                    Marker::ground(lcg_height(seed, x, y))
                };
                vec![marker]
            })
            .collect::<Vec<_>>()
    }))
}

fn lcg_height(seed: u64, x: usize, y: usize) -> i32 {
    let i = (y as u64) << 32 | x as u64;
    let mixed = i
        .wrapping_add(seed)
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    (mixed >> 61) as i32 & 3
}

/// `count` deterministic coordinate pairs; the second of each pair carries
/// up to two trailing zero components.
pub fn coord_pairs(count: usize) -> Vec<(Coord, Coord)> {
    (0..count as i64)
        .map(|i| {
            let a = Coord::from([i % 17 - 8, i % 13 - 6, i % 5 - 2]);
            let mut tail = vec![i % 11 - 5, i % 7 - 3, i % 3 - 1];
            tail.extend(std::iter::repeat(0).take((i % 3) as usize));
            (a, Coord::from(tail))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_profile_has_endpoints() {
        let grid = terrain_profile(4, 7);
        assert_eq!(grid.position_count(), 16);
        let first = grid.position(&Coord::from([0, 0])).unwrap();
        assert_eq!(first.values().next(), Some(&Marker::Start));
        let last = grid.position(&Coord::from([3, 3])).unwrap();
        assert_eq!(last.values().next(), Some(&Marker::End));
    }

    #[test]
    fn terrain_profile_is_deterministic() {
        let a: Vec<Marker> = terrain_profile(5, 3).all_objects().map(|(_, m)| m.clone()).collect();
        let b: Vec<Marker> = terrain_profile(5, 3).all_objects().map(|(_, m)| m.clone()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn coord_pairs_count() {
        assert_eq!(coord_pairs(10).len(), 10);
    }
}
