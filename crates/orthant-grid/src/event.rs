//! Change notifications emitted by a [`Grid`](crate::Grid).

use crate::id::ObjectId;
use orthant_core::Coord;

/// A structural change to a grid.
///
/// Events are delivered synchronously, in the order the changes happen,
/// to every live receiver returned by [`Grid::subscribe`](crate::Grid::subscribe).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridEvent {
    /// A position was created at `coord`.
    PositionAdded {
        /// Coordinate of the new position.
        coord: Coord,
    },
    /// An object changed position.
    ///
    /// `from` is `None` when the object was unplaced before the move;
    /// `to` is `None` when it was taken off the grid.
    ObjectMoved {
        /// The object that moved.
        object: ObjectId,
        /// Previous position, if any.
        from: Option<Coord>,
        /// New position, if any.
        to: Option<Coord>,
    },
}
