//! Core lattice algebra for the Orthant workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the axis table, the [`Direction`] bitmask, the direction-set
//! generators, and the [`Coord`] / [`Move`] value types that every
//! other Orthant crate builds on.
//!
//! ```
//! use orthant_core::{Coord, Direction, Move};
//!
//! let mv = Move::new(Direction::LEFT | Direction::UP, 2);
//! assert_eq!(mv.vector(), Coord::from([-2, 2]));
//!
//! let path: Vec<Coord> = Coord::origin().walk(Direction::RIGHT.to_move(1)).take(3).collect();
//! assert_eq!(path, vec![Coord::from([1, 0]), Coord::from([2, 0]), Coord::from([3, 0])]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod coord;
pub mod direction;
pub mod error;
pub mod movement;
pub mod sets;

pub use axis::{Axis, AXIS_COUNT};
pub use coord::Coord;
pub use direction::{Direction, DirectionFlags};
pub use error::ParseDirectionError;
pub use movement::{Move, Walk};
pub use sets::{all, diagonal, orthogonal, Neighbourhood, DEFAULT_DIMENSIONS};
