//! Reusable initial rasters.
//!
//! - [`Fixture::uniform`]: every cell the same color.
//! - [`Fixture::single_seed`]: one developed cell on an undeveloped grid.
//! - [`Fixture::stripes`]: vertical bands of developed cells.
//! - [`Fixture::scatter`]: deterministic pseudo-random speckle.

use pelt_core::{GridBounds, Pos, Rgba, COLOR_D, COLOR_U};

/// Row-major cells plus their bounds, ready for
/// `RasterBuffer::from_cells`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub bounds: GridBounds,
    pub cells: Vec<Rgba>,
}

impl Fixture {
    pub fn uniform(width: u32, height: u32, color: Rgba) -> Self {
        let bounds = GridBounds::new(width, height).expect("fixture dimensions must be non-zero");
        Self {
            bounds,
            cells: vec![color; bounds.cell_count()],
        }
    }

    /// `COLOR_U` everywhere except `COLOR_D` at `(x, y)`.
    pub fn single_seed(width: u32, height: u32, x: u32, y: u32) -> Self {
        let mut f = Self::uniform(width, height, COLOR_U);
        f.paint(x, y, COLOR_D);
        f
    }

    /// Columns with `x % period < period / 2` are developed.
    pub fn stripes(width: u32, height: u32, period: u32) -> Self {
        let mut f = Self::uniform(width, height, COLOR_U);
        for p in f.bounds.positions().collect::<Vec<_>>() {
            if p.x % period < period / 2 {
                f.paint(p.x, p.y, COLOR_D);
            }
        }
        f
    }

    /// Roughly one cell in `one_in` developed, chosen by a fixed
    /// multiplicative hash of the cell index and `salt`.
    pub fn scatter(width: u32, height: u32, one_in: u64, salt: u64) -> Self {
        let mut f = Self::uniform(width, height, COLOR_U);
        for (i, cell) in f.cells.iter_mut().enumerate() {
            let h = (i as u64 ^ salt)
                .wrapping_mul(6364136223846793007)
                .wrapping_add(1442695040888963407);
            if (h >> 33) % one_in == 0 {
                *cell = COLOR_D;
            }
        }
        f
    }

    pub fn paint(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self
            .bounds
            .index(Pos::new(x, y))
            .expect("fixture position must be in bounds");
        self.cells[i] = color;
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.cells[self.bounds.index(Pos::new(x, y)).expect("in bounds")]
    }

    pub fn count(&self, color: Rgba) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }
}
