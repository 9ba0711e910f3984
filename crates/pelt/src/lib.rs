//! Pelt: D. Young's discrete activator-inhibitor automaton for coat
//! patterns (spots, stripes, and in between).
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Pelt sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use pelt::prelude::*;
//!
//! // One developed cell in the middle of a 5x5 undeveloped grid.
//! let mut cells = Cells::with_default_strategy(5, 5, COLOR_U).unwrap();
//! cells.set_color(2, 2, COLOR_D).unwrap();
//!
//! // Activator radius 1, inhibitor radius 2, inhibitor weight 0.5.
//! cells.develop(1, 2, 0.5).unwrap();
//!
//! // The seed grows into a radius-1 diamond.
//! assert_eq!(cells.count(COLOR_D), 5);
//! assert_eq!(cells.color(2, 1).unwrap(), COLOR_D);
//! assert_eq!(cells.color(1, 1).unwrap(), COLOR_U);
//!
//! // Radii must be strictly ordered.
//! assert!(matches!(
//!     cells.develop(2, 2, 0.5),
//!     Err(DevelopError::InvalidRadii { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pelt-core` | Colors, grid geometry, error types |
//! | [`space`] | `pelt-space` | Neighbourhood strategies |
//! | [`engine`] | `pelt-engine` | Raster, discriminators, the two-pass automaton |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Colors, grid geometry, and errors (`pelt-core`).
pub use pelt_core as types;

/// Neighbourhood strategies (`pelt-space`).
///
/// Provides the [`space::NeighbourhoodStrategy`] trait with
/// [`space::VonNeumann`] (diamond discs) and [`space::Moore`] (square
/// discs).
pub use pelt_space as space;

/// The automaton (`pelt-engine`).
///
/// [`engine::Cells`] owns the [`engine::RasterBuffer`] and advances it
/// with [`engine::Cells::develop`].
pub use pelt_engine as engine;

/// Common imports for typical Pelt usage.
pub mod prelude {
    // Core types
    pub use pelt_core::{DevelopError, GridBounds, GridError, Pos, Rgba, COLOR_D, COLOR_U};

    // Space
    pub use pelt_space::{Moore, NeighbourhoodStrategy, VonNeumann};

    // Engine
    pub use pelt_engine::{
        Cells, CellsConfig, ConfigError, DevelopParams, ExecutionMode, RasterBuffer, StepReport,
    };
}
