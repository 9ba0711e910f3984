//! Benchmark profiles for the Pelt automaton.
//!
//! - [`reference_profile`]: 64x64 grid, Von Neumann discs, default radii
//! - [`stress_profile`]: 256x256 grid on every available core

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pelt_core::{GridError, COLOR_D, COLOR_U};
use pelt_engine::{Cells, CellsConfig, ConfigError, ExecutionMode};
use pelt_space::VonNeumann;

/// Seeding density used by every profile.
pub const DENSITY: f64 = 0.3;

/// 64x64 cells seeded at [`DENSITY`], sequential pass 1.
pub fn reference_profile(seed: u64) -> Result<Cells, ConfigError> {
    profile(64, ExecutionMode::Sequential, seed)
}

/// 256x256 cells seeded at [`DENSITY`], pass 1 split across
/// [`ExecutionMode::auto`] threads.
pub fn stress_profile(seed: u64) -> Result<Cells, ConfigError> {
    profile(256, ExecutionMode::auto(), seed)
}

fn profile(side: u32, mode: ExecutionMode, seed: u64) -> Result<Cells, ConfigError> {
    let mut cells = Cells::new(CellsConfig {
        width: side,
        height: side,
        fill: COLOR_U,
        strategy: Box::new(VonNeumann),
        mode,
    })?;
    cells.seed_random(DENSITY, seed)?;
    Ok(cells)
}

/// ASCII rendering of the raster: `#` for developed cells, `.` for the
/// rest.
pub fn ascii(cells: &Cells) -> Result<String, GridError> {
    let mut out = String::new();
    for y in 0..cells.height() {
        for x in 0..cells.width() {
            let c = cells.color(x, y)?;
            out.push(if c == COLOR_D { '#' } else { '.' });
        }
        out.push('\n');
    }
    Ok(out)
}
