//! Reproducible random initial states.
//!
//! Young's automaton is usually started from uniform noise: each cell is
//! developed with some probability. Seeding uses a ChaCha8 RNG so the
//! same `(density, seed)` always paints the same raster.

use pelt_core::{COLOR_D, COLOR_U};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::ConfigError;
use crate::raster::RasterBuffer;

/// Paint each cell [`COLOR_D`] with probability `density`, otherwise
/// [`COLOR_U`]. Cells are drawn in row-major order.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDensity`] if `density` is NaN or outside
/// `[0, 1]`. The raster is not modified in that case.
pub fn seed_random(raster: &mut RasterBuffer, density: f64, seed: u64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(ConfigError::InvalidDensity { value: density });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for cell in raster.as_mut_slice() {
        *cell = if rng.random_bool(density) {
            COLOR_D
        } else {
            COLOR_U
        };
    }
    Ok(())
}
