//! Coverage mask for traversal-style consumers.

use pelt_core::{GridBounds, GridError, Pos};

/// A `width * height` grid of booleans marking processed cells.
///
/// Independent of development: [`Cells::develop`](crate::Cells::develop)
/// never reads or writes it. Callers that sweep the grid in several
/// passes of their own use it to track what they have covered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedMask {
    bounds: GridBounds,
    bits: Vec<bool>,
}

impl VisitedMask {
    /// Create an all-unvisited mask.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            bits: vec![false; bounds.cell_count()],
        }
    }

    /// Grid dimensions.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Whether column `x`, row `y` has been marked.
    pub fn get(&self, x: u32, y: u32) -> Result<bool, GridError> {
        Ok(self.bits[self.bounds.index(Pos::new(x, y))?])
    }

    /// Mark column `x`, row `y` as visited.
    pub fn set(&mut self, x: u32, y: u32) -> Result<(), GridError> {
        let i = self.bounds.index(Pos::new(x, y))?;
        self.bits[i] = true;
        Ok(())
    }

    /// Clear every mark.
    pub fn reset(&mut self) {
        self.bits.fill(false);
    }

    /// Number of marked cells.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Row-major view of all marks.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}
