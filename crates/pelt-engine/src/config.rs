//! Engine configuration, development parameters, and error types.
//!
//! [`CellsConfig`] is the builder-input for [`Cells::new`](crate::Cells::new).
//! [`DevelopParams`] carries the three values a host exposes to the user:
//! activator radius, inhibitor radius, and inhibitor weight.

use std::error::Error;
use std::fmt;

use pelt_core::{DevelopError, GridBounds, GridError, Rgba, COLOR_U};
use pelt_space::{NeighbourhoodStrategy, VonNeumann};

// ── DevelopParams ──────────────────────────────────────────────────

/// Parameters of one development step.
///
/// The activator weight is fixed at 1; only the inhibitor ring is
/// weighted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevelopParams {
    /// Activator disc radius `RA`. Default: 3.
    pub activator_radius: u32,
    /// Inhibitor disc radius `RI`, strictly greater than `RA`. Default: 6.
    pub inhibitor_radius: u32,
    /// Inhibitor weight `w`, finite and non-negative. Default: 0.35.
    pub inhibitor_weight: f32,
}

impl Default for DevelopParams {
    fn default() -> Self {
        Self {
            activator_radius: 3,
            inhibitor_radius: 6,
            inhibitor_weight: 0.35,
        }
    }
}

impl DevelopParams {
    /// Bundle `(RA, RI, w)`. Not validated until [`validate`](Self::validate).
    pub fn new(activator_radius: u32, inhibitor_radius: u32, inhibitor_weight: f32) -> Self {
        Self {
            activator_radius,
            inhibitor_radius,
            inhibitor_weight,
        }
    }

    /// Check `RA < RI` and that `w` is finite and `>= 0`.
    pub fn validate(&self) -> Result<(), DevelopError> {
        if self.activator_radius >= self.inhibitor_radius {
            return Err(DevelopError::InvalidRadii {
                activator: self.activator_radius,
                inhibitor: self.inhibitor_radius,
            });
        }
        if !self.inhibitor_weight.is_finite() || self.inhibitor_weight < 0.0 {
            return Err(DevelopError::InvalidWeight {
                weight: self.inhibitor_weight,
            });
        }
        Ok(())
    }
}

// ── ExecutionMode ──────────────────────────────────────────────────

/// How pass 1 is scheduled.
///
/// Both modes produce bit-identical discriminators: each cell depends
/// only on the frozen pre-step raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One thread sweeps every row.
    #[default]
    Sequential,
    /// Rows are spread over a dedicated rayon pool, built once when the
    /// mode is set and reused for every generation.
    Parallel {
        /// Worker threads in the pool. Must be at least 1.
        threads: usize,
    },
}

impl ExecutionMode {
    /// Parallel mode sized like rayon's global pool, clamped to
    /// `[1, 64]`.
    pub fn auto() -> Self {
        Self::Parallel {
            threads: rayon::current_num_threads().clamp(1, 64),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building a [`Cells`](crate::Cells) or seeding it.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// Parallel mode was requested with zero threads.
    ZeroThreads,
    /// A seeding density is outside `[0, 1]` or NaN.
    InvalidDensity {
        /// The rejected density.
        value: f64,
    },
    /// The worker pool for parallel execution could not be started.
    ThreadPool {
        /// The builder's error message.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ZeroThreads => write!(f, "parallel execution needs at least 1 thread"),
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
            Self::ThreadPool { reason } => write!(f, "failed to start worker pool: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── CellsConfig ────────────────────────────────────────────────────

/// Everything needed to construct a [`Cells`](crate::Cells).
///
/// The neighbourhood strategy is injected here; there is no global
/// default instance.
#[derive(Debug)]
pub struct CellsConfig {
    /// Number of columns. Default: 64.
    pub width: u32,
    /// Number of rows. Default: 64.
    pub height: u32,
    /// Initial color of every cell. Default: [`COLOR_U`].
    pub fill: Rgba,
    /// Distance metric for activator and inhibitor discs.
    /// Default: [`VonNeumann`].
    pub strategy: Box<dyn NeighbourhoodStrategy>,
    /// Pass-1 scheduling. Default: sequential.
    pub mode: ExecutionMode,
}

impl Default for CellsConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            fill: COLOR_U,
            strategy: Box::new(VonNeumann),
            mode: ExecutionMode::Sequential,
        }
    }
}

impl CellsConfig {
    /// Check structural invariants and return the grid bounds.
    pub fn validate(&self) -> Result<GridBounds, ConfigError> {
        let bounds = GridBounds::new(self.width, self.height)?;
        if let ExecutionMode::Parallel { threads: 0 } = self.mode {
            return Err(ConfigError::ZeroThreads);
        }
        Ok(bounds)
    }
}
