//! Test fixtures for Orthant development.
//!
//! Builders for small puzzle grids written as text, plus helpers for
//! collecting grid events in assertions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{course, drain_events, heightmap};
