//! Brute-force reference automaton.
//!
//! For every cell, scans the *whole* grid and classifies each other cell
//! by a directly computed distance. Quadratic in cell count, so only for
//! small test grids, but it shares no code with neighbourhood
//! enumeration or the engine's passes.

use pelt_core::{GridBounds, Rgba, COLOR_D, COLOR_U};

/// Distance metric for the reference computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    /// `|dx| + |dy|` (diamond discs).
    Manhattan,
    /// `max(|dx|, |dy|)` (square discs).
    Chebyshev,
}

impl Metric {
    pub fn distance(self, ax: u32, ay: u32, bx: u32, by: u32) -> u64 {
        let dx = (ax as i64 - bx as i64).unsigned_abs();
        let dy = (ay as i64 - by as i64).unsigned_abs();
        match self {
            Metric::Manhattan => dx + dy,
            Metric::Chebyshev => dx.max(dy),
        }
    }
}

/// Discriminator `AD - w * (count(RI) - AD)` for every cell, row-major.
pub fn reference_discs(
    bounds: GridBounds,
    cells: &[Rgba],
    metric: Metric,
    ra: u32,
    ri: u32,
    w: f32,
) -> Vec<f32> {
    assert_eq!(cells.len(), bounds.cell_count());
    let coords = |i: usize| {
        let p = bounds.pos_of(i).expect("index within cell count");
        (p.x, p.y)
    };

    (0..cells.len())
        .map(|i| {
            let (cx, cy) = coords(i);
            let mut within_ra = 0usize;
            let mut within_ri = 0usize;
            for (j, &c) in cells.iter().enumerate() {
                if c != COLOR_D {
                    continue;
                }
                let (x, y) = coords(j);
                let d = metric.distance(cx, cy, x, y);
                if d <= ra as u64 {
                    within_ra += 1;
                }
                if d <= ri as u64 {
                    within_ri += 1;
                }
            }
            within_ra as f32 - w * (within_ri - within_ra) as f32
        })
        .collect()
}

/// The raster one generation later: sign of the reference discriminator
/// picks `COLOR_D` / `COLOR_U`; zero keeps the old color.
pub fn reference_step(
    bounds: GridBounds,
    cells: &[Rgba],
    metric: Metric,
    ra: u32,
    ri: u32,
    w: f32,
) -> Vec<Rgba> {
    reference_discs(bounds, cells, metric, ra, ri, w)
        .into_iter()
        .zip(cells)
        .map(|(d, &old)| {
            if d > 0.0 {
                COLOR_D
            } else if d < 0.0 {
                COLOR_U
            } else {
                old
            }
        })
        .collect()
}
