//! Sparse object grid over the Orthant lattice.
//!
//! A [`Grid`] indexes positions by [`Coord`](orthant_core::Coord),
//! creating them lazily the first time they are touched. Objects are
//! owned by the grid, addressed by [`ObjectId`], and sit on at most one
//! position at a time. Every structural change is announced synchronously
//! as a [`GridEvent`] to subscribers obtained from [`Grid::subscribe`].
//!
//! ```
//! use orthant_core::{Coord, Direction, Move};
//! use orthant_grid::{Grid, GridEvent};
//!
//! let mut grid = Grid::new();
//! let events = grid.subscribe();
//! let crate_id = grid.place("crate", Coord::from([0, 0]));
//! let to = grid.move_by(crate_id, &Move::new(Direction::UP, 2)).unwrap();
//! assert_eq!(to, Coord::from([0, 2]));
//! assert_eq!(grid.position(&to).unwrap().len(), 1);
//! assert!(events.try_iter().any(|e| matches!(e, GridEvent::ObjectMoved { .. })));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod id;
pub mod position;

pub use config::{ConfigError, GridConfig};
pub use error::GridError;
pub use event::GridEvent;
pub use grid::{Grid, GridObject};
pub use id::ObjectId;
pub use position::Position;
