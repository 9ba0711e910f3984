//! The core `NeighbourhoodStrategy` trait and `dyn` downcast support.

use pelt_core::{GridBounds, GridError, Pos};
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;

/// Positions returned by [`NeighbourhoodStrategy::neighbourhood`].
///
/// Inline capacity covers a radius-2 diamond (13 cells) without touching
/// the heap.
pub type Neighbourhood = SmallVec<[Pos; 16]>;

/// A distance metric over grid cells, used to enumerate discs.
///
/// The disc of `center` at radius `R` is every in-bounds cell `p` with
/// `distance(center, p) <= R`. The center itself is always included, so
/// radius 0 yields `{center}`. Discs are nested: the disc at `R` is a
/// subset of the disc at `R + 1`.
///
/// # Object Safety
///
/// The engine holds a `Box<dyn NeighbourhoodStrategy>`. Use
/// `downcast_ref` on the trait object to specialize on a known metric.
///
/// # Implementing
///
/// Only [`name`](Self::name) and [`distance`](Self::distance) are
/// required. The provided [`visit`](Self::visit) scans the Chebyshev box
/// of radius `R` around the center and filters by `distance`, which is
/// correct for any metric that never ranks a cell closer than its
/// Chebyshev distance (L1, L2, L-inf all qualify). Backends override
/// `visit` with exact spans when they can.
pub trait NeighbourhoodStrategy: Any + Send + Sync + fmt::Debug + 'static {
    /// Stable identifier, e.g. `"von_neumann"`.
    fn name(&self) -> &str;

    /// Distance between two cells under this metric.
    fn distance(&self, a: Pos, b: Pos) -> u32;

    /// Call `f` once for every cell in the disc of `center` at `radius`,
    /// in row-major order (y, then x).
    ///
    /// Returns `Err(GridError::CoordOutOfBounds)` if `center` is not in
    /// `bounds`; `f` is not called in that case.
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
                let p = Pos::new(x, y);
                if self.distance(center, p) <= radius {
                    f(p);
                }
            }
        }
        Ok(())
    }

    /// Collect the disc of `center` at `radius` in row-major order.
    fn neighbourhood(
        &self,
        bounds: &GridBounds,
        center: Pos,
        radius: u32,
    ) -> Result<Neighbourhood, GridError> {
        let mut out = Neighbourhood::new();
        self.visit(bounds, center, radius, &mut |p| out.push(p))?;
        Ok(out)
    }
}

impl dyn NeighbourhoodStrategy {
    /// Attempt to downcast a trait object to a concrete strategy type.
    pub fn downcast_ref<T: NeighbourhoodStrategy>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Inclusive range `[c - r, c + r]` clipped to `[0, len)`.
pub(crate) fn axis_span(c: u32, r: u32, len: u32) -> (u32, u32) {
    let lo = c.saturating_sub(r);
    let hi = (c as u64 + r as u64).min(len as u64 - 1) as u32;
    (lo, hi)
}

/// Absolute difference of two axis values.
#[inline]
pub(crate) fn axis_distance(a: u32, b: u32) -> u32 {
    a.abs_diff(b)
}
