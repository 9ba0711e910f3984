//! Activator-inhibitor automaton engine for Pelt coat patterns.
//!
//! [`Cells`] owns a [`RasterBuffer`] of RGBA cells and advances it one
//! generation per [`develop`](Cells::develop) call using D. Young's
//! discrete Turing-pattern rule:
//!
//! 1. **Pass 1** computes, for every cell, the discriminator
//!    `AD - w * ID` into a [`DiscriminatorField`], where `AD` counts
//!    developed cells within the activator radius and `ID` counts those
//!    in the ring out to the inhibitor radius. The raster is only read.
//! 2. **Pass 2** commits colors by discriminator sign once every cell
//!    has been evaluated.
//!
//! Neighbourhoods come from an injected
//! [`NeighbourhoodStrategy`](pelt_space::NeighbourhoodStrategy).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cells;
pub mod config;
pub mod debug;
pub mod field;
pub mod raster;
pub mod seed;
pub mod visited;

pub use cells::{Cells, StepReport};
pub use config::{CellsConfig, ConfigError, DevelopParams, ExecutionMode};
pub use debug::{render_discs, render_visited};
pub use field::DiscriminatorField;
pub use raster::RasterBuffer;
pub use seed::seed_random;
pub use visited::VisitedMask;
