//! Read-only views of grid positions.

use crate::grid::Grid;
use crate::id::ObjectId;
use orthant_core::{Coord, Move, Walk};
use smallvec::SmallVec;
use std::fmt;

/// A position on a [`Grid`], borrowed from the grid that owns it.
///
/// Positions exist once something has touched their coordinate (placing
/// an object there, or [`Grid::get_or_insert_position`]) and are never
/// removed, so a position may be empty.
pub struct Position<'g, T> {
    grid: &'g Grid<T>,
    coord: &'g Coord,
    objects: &'g [ObjectId],
}

impl<'g, T> Position<'g, T> {
    pub(crate) fn new(grid: &'g Grid<T>, coord: &'g Coord, objects: &'g [ObjectId]) -> Self {
        Self {
            grid,
            coord,
            objects,
        }
    }

    /// The coordinate this position was created with.
    pub fn coord(&self) -> &'g Coord {
        self.coord
    }

    /// Objects on this position, in the order they arrived.
    pub fn objects(&self) -> &'g [ObjectId] {
        self.objects
    }

    /// Values of the objects on this position, in arrival order.
    pub fn values(&self) -> impl Iterator<Item = &'g T> + 'g {
        let grid = self.grid;
        self.objects
            .iter()
            .filter_map(move |&id| grid.object(id).map(|o| o.value()))
    }

    /// Number of objects on this position.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no object is on this position.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns `true` if at least one object is on this position.
    pub fn is_occupied(&self) -> bool {
        !self.objects.is_empty()
    }

    /// The coordinate reached by applying `mv` from here.
    pub fn step(&self, mv: &Move) -> Coord {
        self.coord.offset(mv)
    }

    /// Endless walk from here; see [`Coord::walk`].
    pub fn walk(&self, mv: Move) -> Walk {
        self.coord.walk(mv)
    }

    /// Neighbouring coordinates under the grid's neighbourhood.
    pub fn neighbours(&self) -> SmallVec<[Coord; 8]> {
        self.grid.neighbours(self.coord)
    }

    /// Neighbouring positions that hold at least one object.
    pub fn occupied_neighbours(&self) -> impl Iterator<Item = Position<'g, T>> + 'g {
        let grid = self.grid;
        grid.neighbours(self.coord)
            .into_iter()
            .filter_map(move |c| grid.position(&c))
            .filter(Position::is_occupied)
    }
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

impl<T> fmt::Debug for Position<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("coord", self.coord)
            .field("objects", &self.objects)
            .finish()
    }
}
