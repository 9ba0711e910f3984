//! Square neighbourhood under Chebyshev (L-inf) distance.

use crate::strategy::{axis_distance, axis_span, NeighbourhoodStrategy};
use pelt_core::{GridBounds, GridError, Pos};

/// Moore neighbourhood: the `(2R + 1) x (2R + 1)` square around the
/// center, where diagonal steps cost the same as axis-aligned ones.
///
/// Produces blockier coats than [`VonNeumann`](crate::VonNeumann) for the
/// same radii, since every disc holds more cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Moore;

impl Moore {
    /// Name reported by [`NeighbourhoodStrategy::name`].
    pub const NAME: &'static str = "moore";
}

impl NeighbourhoodStrategy for Moore {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn distance(&self, a: Pos, b: Pos) -> u32 {
        axis_distance(a.x, b.x).max(axis_distance(a.y, b.y))
    }

    fn visit(
        &self,
        bounds: &GridBounds,
        center: Pos,
        radius: u32,
        f: &mut dyn FnMut(Pos),
    ) -> Result<(), GridError> {
        bounds.index(center)?;
        let (x_lo, x_hi) = axis_span(center.x, radius, bounds.width());
        let (y_lo, y_hi) = axis_span(center.y, radius, bounds.height());
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                f(Pos::new(x, y));
            }
        }
        Ok(())
    }
}
