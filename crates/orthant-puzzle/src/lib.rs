//! Height-map puzzle layer for Orthant grids.
//!
//! A puzzle is a [`Grid<Marker>`](orthant_grid::Grid): every cell holds a
//! ground marker with a height, two of them are the start and end, and a
//! walker may step orthogonally onto ground whose height differs by at
//! most one. This crate provides the marker types and the neighbour
//! queries; solving is left to callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod marker;
pub mod walk;

pub use error::PuzzleError;
pub use marker::Marker;
pub use walk::{neighbours, walkable_neighbours};
