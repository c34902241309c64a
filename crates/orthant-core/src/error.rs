//! Error types for the lattice algebra.
//!
//! Every generator and arithmetic operation in this crate is total; the
//! only fallible entry point is parsing a [`Direction`](crate::Direction)
//! from text.

use std::error::Error;
use std::fmt;

/// Errors from parsing a [`Direction`](crate::Direction) with `str::parse`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseDirectionError {
    /// The input was empty or only whitespace.
    Empty,
    /// A `|`-separated token did not name a direction flag.
    UnknownFlag {
        /// The offending token, trimmed.
        token: String,
    },
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty direction string"),
            Self::UnknownFlag { token } => write!(f, "unknown direction flag '{token}'"),
        }
    }
}

impl Error for ParseDirectionError {}
