//! Object identifiers.

use std::fmt;

/// Identifies an object owned by a [`Grid`](crate::Grid).
///
/// Objects are assigned sequential IDs in insertion order; `ObjectId(n)`
/// is the n-th object inserted into its grid. IDs are only meaningful for
/// the grid that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ObjectId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
