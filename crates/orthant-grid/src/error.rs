//! Error types for grid operations.

use crate::id::ObjectId;
use std::error::Error;
use std::fmt;

/// Errors from moving or looking up objects on a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The ID was not issued by this grid.
    UnknownObject {
        /// The offending ID.
        object: ObjectId,
    },
    /// A relative move was requested for an object that is not on any
    /// position.
    NotPlaced {
        /// The unplaced object.
        object: ObjectId,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownObject { object } => write!(f, "unknown object {object}"),
            Self::NotPlaced { object } => {
                write!(f, "object {object} is not placed on the grid")
            }
        }
    }
}

impl Error for GridError {}
