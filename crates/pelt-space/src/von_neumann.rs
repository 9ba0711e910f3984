//! Diamond neighbourhood under Manhattan (L1) distance.

use crate::strategy::{axis_distance, axis_span, NeighbourhoodStrategy};
use pelt_core::{GridBounds, GridError, Pos};

/// Von Neumann neighbourhood: every cell reachable in at most `R`
/// axis-aligned steps.
///
/// The disc of radius `R` is a diamond of `2R(R + 1) + 1` cells before
/// clipping to the grid edges. Cells beyond the edge are simply absent;
/// there is no wrapping.
///
/// # Examples
///
/// ```
/// use pelt_core::{GridBounds, Pos};
/// use pelt_space::{NeighbourhoodStrategy, VonNeumann};
///
/// let bounds = GridBounds::new(10, 10).unwrap();
/// // Diamond of radius 2: 1 + 3 + 5 + 3 + 1 = 13 cells.
/// let disc = VonNeumann.neighbourhood(&bounds, Pos::new(5, 5), 2).unwrap();
/// assert_eq!(disc.len(), 13);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VonNeumann;

impl VonNeumann {
    /// Name reported by [`NeighbourhoodStrategy::name`].
    pub const NAME: &'static str = "von_neumann";
}

impl NeighbourhoodStrategy for VonNeumann {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn distance(&self, a: Pos, b: Pos) -> u32 {
        axis_distance(a.x, b.x).saturating_add(axis_distance(a.y, b.y))
    }

    fn visit(
        &self,
        bounds: &GridBounds,
        center: Pos,
        radius: u32,
        f: &mut dyn FnMut(Pos),
    ) -> Result<(), GridError> {
        bounds.index(center)?;
        let (y_lo, y_hi) = axis_span(center.y, radius, bounds.height());
        for y in y_lo..=y_hi {
            // Row half-width shrinks by one per row away from the center.
            let half = radius - axis_distance(y, center.y);
            let (x_lo, x_hi) = axis_span(center.x, half, bounds.width());
            for x in x_lo..=x_hi {
                f(Pos::new(x, y));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn p(x: u32, y: u32) -> Pos {
        Pos::new(x, y)
    }

    fn bounds(w: u32, h: u32) -> GridBounds {
        GridBounds::new(w, h).unwrap()
    }

    // ── Disc shape ──────────────────────────────────────────────

    #[test]
    fn radius_zero_is_center() {
        let n = VonNeumann.neighbourhood(&bounds(5, 5), p(2, 2), 0).unwrap();
        assert_eq!(n.as_slice(), &[p(2, 2)]);
    }

    #[test]
    fn radius_one_interior() {
        let n = VonNeumann.neighbourhood(&bounds(5, 5), p(2, 2), 1).unwrap();
        // Row-major: north, west, center, east, south.
        assert_eq!(n.as_slice(), &[p(2, 1), p(1, 2), p(2, 2), p(3, 2), p(2, 3)]);
    }

    #[test]
    fn radius_one_corner_is_clipped() {
        let n = VonNeumann.neighbourhood(&bounds(5, 5), p(0, 0), 1).unwrap();
        assert_eq!(n.as_slice(), &[p(0, 0), p(1, 0), p(0, 1)]);
    }

    #[test]
    fn diamond_sizes_match_closed_form() {
        let b = bounds(41, 41);
        for r in 0..=20u32 {
            let n = VonNeumann.neighbourhood(&b, p(20, 20), r).unwrap();
            assert_eq!(n.len() as u32, 2 * r * (r + 1) + 1, "radius {r}");
        }
    }

    #[test]
    fn radius_larger_than_grid_covers_grid() {
        let b = bounds(4, 3);
        let n = VonNeumann.neighbourhood(&b, p(1, 1), 100).unwrap();
        assert_eq!(n.len(), b.cell_count());
    }

    #[test]
    fn huge_radius_does_not_overflow() {
        let b = bounds(3, 3);
        let n = VonNeumann.neighbourhood(&b, p(2, 2), u32::MAX).unwrap();
        assert_eq!(n.len(), 9);
    }

    #[test]
    fn center_out_of_bounds_is_rejected() {
        let b = bounds(5, 5);
        let err = VonNeumann.neighbourhood(&b, p(5, 0), 1).unwrap_err();
        assert!(matches!(err, GridError::CoordOutOfBounds { .. }));
    }

    #[test]
    fn single_cell_grid() {
        let n = VonNeumann.neighbourhood(&bounds(1, 1), p(0, 0), 3).unwrap();
        assert_eq!(n.as_slice(), &[p(0, 0)]);
    }

    // ── Distance ────────────────────────────────────────────────

    #[test]
    fn distance_manhattan() {
        assert_eq!(VonNeumann.distance(p(0, 0), p(3, 4)), 7);
        assert_eq!(VonNeumann.distance(p(3, 2), p(7, 5)), 7);
        assert_eq!(VonNeumann.distance(p(4, 4), p(4, 4)), 0);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_square_grid() {
        compliance::run_full_compliance(&VonNeumann, &bounds(8, 8), 6);
    }

    #[test]
    fn compliance_wide_grid() {
        compliance::run_full_compliance(&VonNeumann, &bounds(12, 3), 5);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn visit_matches_provided_scan(
            w in 1u32..12, h in 1u32..12,
            x in 0u32..12, y in 0u32..12,
            r in 0u32..8,
        ) {
            let b = bounds(w, h);
            let c = p(x % w, y % h);
            let fast = VonNeumann.neighbourhood(&b, c, r).unwrap();

            // Reference: brute force over the whole grid.
            let slow: Vec<Pos> = b
                .positions()
                .filter(|q| VonNeumann.distance(c, *q) <= r)
                .collect();
            prop_assert_eq!(fast.as_slice(), slow.as_slice());
        }
    }
}
