//! The RGBA raster the automaton reads and mutates.

use pelt_core::{GridBounds, GridError, Pos, Rgba};

/// A `width * height` grid of RGBA cells, stored row-major.
///
/// All accessors are bounds-checked and return
/// [`GridError::CoordOutOfBounds`] rather than clamping or wrapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    bounds: GridBounds,
    cells: Vec<Rgba>,
}

impl RasterBuffer {
    /// Create a raster filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Result<Self, GridError> {
        Ok(Self::with_bounds(GridBounds::new(width, height)?, fill))
    }

    /// Create a raster over existing bounds, filled with `fill`.
    pub fn with_bounds(bounds: GridBounds, fill: Rgba) -> Self {
        Self {
            bounds,
            cells: vec![fill; bounds.cell_count()],
        }
    }

    /// Wrap a row-major cell buffer.
    ///
    /// Returns `Err(GridError::BufferLength)` unless `cells` holds exactly
    /// one color per cell.
    pub fn from_cells(bounds: GridBounds, cells: Vec<Rgba>) -> Result<Self, GridError> {
        if cells.len() != bounds.cell_count() {
            return Err(GridError::BufferLength {
                expected: bounds.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { bounds, cells })
    }

    /// Grid dimensions.
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Color at column `x`, row `y`.
    pub fn color(&self, x: u32, y: u32) -> Result<Rgba, GridError> {
        self.color_at(Pos::new(x, y))
    }

    /// Color at `pos`.
    pub fn color_at(&self, pos: Pos) -> Result<Rgba, GridError> {
        Ok(self.cells[self.bounds.index(pos)?])
    }

    /// Set the color at column `x`, row `y`.
    pub fn set_color(&mut self, x: u32, y: u32, color: Rgba) -> Result<(), GridError> {
        self.set_color_at(Pos::new(x, y), color)
    }

    /// Set the color at `pos`.
    pub fn set_color_at(&mut self, pos: Pos, color: Rgba) -> Result<(), GridError> {
        let i = self.bounds.index(pos)?;
        self.cells[i] = color;
        Ok(())
    }

    /// Paint every cell with `color`.
    pub fn fill(&mut self, color: Rgba) {
        self.cells.fill(color);
    }

    /// Number of cells exactly equal to `color`.
    pub fn count(&self, color: Rgba) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Row-major view of all cells.
    pub fn as_slice(&self) -> &[Rgba] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Rgba] {
        &mut self.cells
    }

    /// Flat `RGBA8` bytes, row-major, four bytes per cell.
    ///
    /// This is the layout image writers expect for an `RGBA` buffer of
    /// `width x height`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.cells.iter().flat_map(|c| c.to_array()).collect()
    }
}
