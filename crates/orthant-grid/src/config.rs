//! Grid configuration, validation, and error types.

use orthant_core::{Neighbourhood, AXIS_COUNT, DEFAULT_DIMENSIONS};
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `dimensions` is zero or larger than the axis table.
    InvalidDimensions {
        /// The configured value.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { configured } => write!(
                f,
                "dimensions must be in 1..={AXIS_COUNT}, got {configured}"
            ),
        }
    }
}

impl Error for ConfigError {}

// ── GridConfig ─────────────────────────────────────────────────────

/// Configuration for constructing a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of leading axes neighbourhood queries range over. Default: 2.
    pub dimensions: usize,
    /// Which direction set neighbourhood queries use. Default: orthogonal.
    pub neighbourhood: Neighbourhood,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
            neighbourhood: Neighbourhood::Orthogonal,
        }
    }
}

impl GridConfig {
    /// Configuration with the given dimension count and neighbourhood.
    pub fn new(dimensions: usize, neighbourhood: Neighbourhood) -> Self {
        Self {
            dimensions,
            neighbourhood,
        }
    }

    /// Validate all structural invariants.
    ///
    /// `dimensions` must be in `1..=AXIS_COUNT`. Unlike the direction
    /// generators, which clamp, a grid rejects out-of-range counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 || self.dimensions > AXIS_COUNT {
            return Err(ConfigError::InvalidDimensions {
                configured: self.dimensions,
            });
        }
        Ok(())
    }
}
