//! Orthant: direction algebra and object grids on N-dimensional lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Orthant sub-crates. For most users, adding `orthant` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use orthant::prelude::*;
//!
//! // Eight-way movement on the plane.
//! assert_eq!(Neighbourhood::All.directions(2).len(), 8);
//!
//! // Diagonal moves produce two-axis displacements.
//! let mv = Move::new(Direction::LEFT | Direction::UP, 2);
//! assert_eq!(mv.vector(), Coord::from([-2, 2]));
//!
//! // A tiny height-map puzzle.
//! let mut grid: Grid<Marker> = Grid::new();
//! grid.place(Marker::Start, Coord::from([0, 0]));
//! grid.place(Marker::ground(0), Coord::from([1, 0]));
//! grid.place(Marker::ground(5), Coord::from([0, 1]));
//! let next = orthant::puzzle::walkable_neighbours(&grid, &Coord::origin()).unwrap();
//! assert_eq!(next, vec![Coord::from([1, 0]), Coord::from([0, 1])]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `orthant-core` | Axes, directions, direction sets, coordinates, moves |
//! | [`grid`] | `orthant-grid` | Position index, objects, change events, configuration |
//! | [`puzzle`] | `orthant-puzzle` | Height-map markers and walkability queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Axes, directions, coordinates, and moves (`orthant-core`).
///
/// The generators [`types::orthogonal`], [`types::diagonal`] and
/// [`types::all`] enumerate direction sets over the leading axes.
pub use orthant_core as types;

/// Sparse object grid and change notification (`orthant-grid`).
pub use orthant_grid as grid;

/// Height-map puzzle layer (`orthant-puzzle`).
pub use orthant_puzzle as puzzle;

/// Common imports for typical Orthant usage.
///
/// ```rust
/// use orthant::prelude::*;
/// ```
pub mod prelude {
    // Core algebra
    pub use orthant_core::{Axis, Coord, Direction, Move, Neighbourhood, Walk};

    // Grid
    pub use orthant_grid::{Grid, GridConfig, GridError, GridEvent, ObjectId};

    // Puzzle
    pub use orthant_puzzle::{Marker, PuzzleError};
}
