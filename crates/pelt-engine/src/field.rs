//! Per-cell discriminator values produced by pass 1.

use pelt_core::{GridBounds, GridError, Pos};

/// A `width * height` grid of discriminators, stored row-major.
///
/// Rebuilt in full at the start of every generation. The buffer is
/// allocated once and overwritten in place, so repeated development does
/// not reallocate.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscriminatorField {
    bounds: GridBounds,
    values: Vec<f32>,
}

impl DiscriminatorField {
    /// Create a zeroed field.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            values: vec![0.0; bounds.cell_count()],
        }
    }

    /// Grid dimensions.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Discriminator at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> Result<f32, GridError> {
        Ok(self.values[self.bounds.index(Pos::new(x, y))?])
    }

    /// Overwrite the discriminator at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, value: f32) -> Result<(), GridError> {
        let i = self.bounds.index(Pos::new(x, y))?;
        self.values[i] = value;
        Ok(())
    }

    /// Row-major view of all values.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Number of cells with a strictly positive discriminator.
    pub fn positive_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0.0).count()
    }

    /// Number of cells with a strictly negative discriminator.
    pub fn negative_count(&self) -> usize {
        self.values.iter().filter(|&&v| v < 0.0).count()
    }
}
