//! Core types for the Pelt coat-pattern automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell colors, grid geometry and error types shared by the spatial
//! and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod grid;

pub use color::{Rgba, COLOR_D, COLOR_U};
pub use error::{DevelopError, GridError};
pub use grid::{GridBounds, Pos};
