//! Puzzle marker values.

use orthant_core::Coord;

/// What an object on a puzzle grid represents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Where the walker begins. Ground of [`Marker::WILDCARD_HEIGHT`].
    Start,
    /// Where the walker must arrive. Ground of [`Marker::WILDCARD_HEIGHT`].
    End,
    /// Walkable terrain at a height.
    Ground {
        /// Terrain height.
        height: i32,
    },
    /// A recorded route through the grid.
    Path(Vec<Coord>),
}

impl Marker {
    /// Height carried by start and end markers.
    ///
    /// Standing on ground of this height, every neighbouring ground is
    /// reachable.
    pub const WILDCARD_HEIGHT: i32 = -1;

    /// Ground of the given height.
    pub const fn ground(height: i32) -> Self {
        Self::Ground { height }
    }

    /// The marker's ground height, or `None` if it is not ground.
    pub fn ground_height(&self) -> Option<i32> {
        match self {
            Self::Start | Self::End => Some(Self::WILDCARD_HEIGHT),
            Self::Ground { height } => Some(*height),
            Self::Path(_) => None,
        }
    }

    /// Returns `true` for start, end, and plain ground.
    pub fn is_ground(&self) -> bool {
        self.ground_height().is_some()
    }

    /// Whether a walker standing at height `from` may step onto this marker.
    pub fn reachable_from(&self, from: i32) -> bool {
        match self.ground_height() {
            Some(height) => from == Self::WILDCARD_HEIGHT || height.abs_diff(from) <= 1,
            None => false,
        }
    }
}
