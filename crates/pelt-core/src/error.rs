//! Error types for grid access and automaton development.
//!
//! Every error here is a caller error: the automaton is deterministic, so
//! nothing is retried and nothing is logged-and-continued.

use crate::grid::{GridBounds, Pos};
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A position lies outside the grid. Accessors never clamp or wrap.
    CoordOutOfBounds {
        /// The offending position.
        pos: Pos,
        /// The grid it was checked against.
        bounds: GridBounds,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A grid dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The value that was provided.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A flat buffer does not hold exactly one value per cell.
    BufferLength {
        /// `width * height` of the grid.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { pos, bounds } => {
                write!(f, "coordinate {pos} out of bounds: {bounds}")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::BufferLength { expected, found } => {
                write!(f, "buffer holds {found} cells, grid has {expected}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from a development step, raised before any cell is touched.
#[derive(Clone, Debug, PartialEq)]
pub enum DevelopError {
    /// The activator radius is not strictly smaller than the inhibitor
    /// radius, so the inhibitor ring would be empty or inverted.
    InvalidRadii {
        /// Activator radius `RA`.
        activator: u32,
        /// Inhibitor radius `RI`.
        inhibitor: u32,
    },
    /// The inhibitor weight is negative, NaN or infinite.
    InvalidWeight {
        /// The rejected weight.
        weight: f32,
    },
    /// A neighbourhood query failed during the discriminator pass.
    Grid(GridError),
}

impl fmt::Display for DevelopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadii {
                activator,
                inhibitor,
            } => write!(
                f,
                "activator radius RA={activator} must be less than inhibitor radius RI={inhibitor}"
            ),
            Self::InvalidWeight { weight } => {
                write!(f, "inhibitor weight must be finite and >= 0, got {weight}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for DevelopError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for DevelopError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
