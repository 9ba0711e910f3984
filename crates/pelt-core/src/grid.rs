//! Grid geometry: positions, bounds, and row-major indexing.

use crate::error::GridError;
use std::fmt;

/// A cell position: `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    /// Column, `0 <= x < width`.
    pub x: u32,
    /// Row, `0 <= y < height`.
    pub y: u32,
}

impl Pos {
    /// Construct a position from column and row.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Pos {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of a non-empty rectangular grid.
///
/// Every per-cell buffer in the workspace is stored row-major: the flat
/// index of `(x, y)` is `y * width + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    width: u32,
    height: u32,
}

impl GridBounds {
    /// Maximum dimension size: neighbourhood arithmetic is done in `i64`
    /// on coordinates that must fit in `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create bounds for a `width * height` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// `true` if `pos` lies inside the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Check `pos` and return its flat row-major index.
    pub fn index(&self, pos: Pos) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::CoordOutOfBounds { pos, bounds: *self });
        }
        Ok(self.index_unchecked(pos))
    }

    /// Flat row-major index of a position already known to be in bounds.
    #[inline]
    pub fn index_unchecked(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {self}");
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Position of a flat row-major index.
    ///
    /// Returns `None` if `index >= cell_count()`.
    pub fn pos_of(&self, index: usize) -> Option<Pos> {
        if index >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Pos::new((index % w) as u32, (index / w) as u32))
    }

    /// All positions in row-major order: `(0,0), (1,0), ..., (w-1,h-1)`.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Pos::new(x, y)))
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0, {}) x [0, {})", self.width, self.height)
    }
}
