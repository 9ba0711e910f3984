//! Test utilities for Pelt development.
//!
//! Provides raster [`fixtures`] and a brute-force [`reference`] automaton.
//! Nothing here depends on the engine or on neighbourhood strategies, so
//! tests can compare the engine against a computation that shares none of
//! its code.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::Fixture;
pub use reference::{reference_discs, reference_step, Metric};
