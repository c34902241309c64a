//! Neighbour and walkability queries over a puzzle grid.

use crate::error::PuzzleError;
use crate::marker::Marker;
use orthant_core::{orthogonal, Coord, Move};
use orthant_grid::Grid;
use tracing::trace;

/// Puzzles are walked on the X/Y plane.
const PUZZLE_DIMENSIONS: usize = 2;

fn orthogonal_steps(coord: &Coord) -> impl Iterator<Item = Coord> + '_ {
    orthogonal(PUZZLE_DIMENSIONS)
        .into_iter()
        .map(move |d| coord.offset(&Move::unit(d)))
}

/// Orthogonal neighbours of `coord` whose positions hold any object.
///
/// Order is `Left, Right, Down, Up`. Neighbours that were never created
/// count as empty.
pub fn neighbours(grid: &Grid<Marker>, coord: &Coord) -> Vec<Coord> {
    orthogonal_steps(coord)
        .filter(|c| grid.position(c).is_some_and(|p| p.is_occupied()))
        .collect()
}

/// Orthogonal neighbours of `coord` a walker standing there may step onto.
///
/// The position at `coord` must hold exactly one ground marker (start,
/// end, or ground); its height `h` decides reachability. A neighbour is
/// walkable when any of its markers is ground of height `g` with
/// `h == -1 || |g - h| <= 1`.
pub fn walkable_neighbours(grid: &Grid<Marker>, coord: &Coord) -> Result<Vec<Coord>, PuzzleError> {
    let height = current_height(grid, coord)?;
    let walkable: Vec<Coord> = orthogonal_steps(coord)
        .filter(|c| {
            grid.position(c)
                .is_some_and(|p| p.values().any(|m| m.reachable_from(height)))
        })
        .collect();
    trace!(coord = %coord, height, walkable = walkable.len(), "walkable neighbours");
    Ok(walkable)
}

fn current_height(grid: &Grid<Marker>, coord: &Coord) -> Result<i32, PuzzleError> {
    let no_ground = || PuzzleError::NoGround {
        coord: coord.clone(),
    };
    let position = grid.position(coord).ok_or_else(no_ground)?;
    let mut heights = position.values().filter_map(Marker::ground_height);
    let height = heights.next().ok_or_else(no_ground)?;
    let extra = heights.count();
    if extra > 0 {
        return Err(PuzzleError::AmbiguousGround {
            coord: coord.clone(),
            count: extra + 1,
        });
    }
    Ok(height)
}
