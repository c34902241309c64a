//! Error types for puzzle queries.

use orthant_core::Coord;
use std::error::Error;
use std::fmt;

/// Errors from [`walkable_neighbours`](crate::walkable_neighbours).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    /// The queried position holds no ground marker, or does not exist.
    NoGround {
        /// The queried coordinate.
        coord: Coord,
    },
    /// The queried position holds more than one ground marker.
    AmbiguousGround {
        /// The queried coordinate.
        coord: Coord,
        /// How many ground markers were found.
        count: usize,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGround { coord } => write!(f, "no ground at {coord}"),
            Self::AmbiguousGround { coord, count } => {
                write!(f, "{count} ground markers at {coord}, expected exactly one")
            }
        }
    }
}

impl Error for PuzzleError {}
