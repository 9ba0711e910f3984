//! NeighbourhoodStrategy compliance test helpers.
//!
//! These functions verify that a strategy satisfies the invariants the
//! engine relies on. Reused across all strategy test modules.

use crate::strategy::NeighbourhoodStrategy;
use indexmap::IndexSet;
use pelt_core::{GridBounds, Pos};

/// Assert that radius 0 yields exactly the center.
pub fn assert_radius_zero_singleton(s: &dyn NeighbourhoodStrategy, bounds: &GridBounds) {
    for c in bounds.positions() {
        let n = s.neighbourhood(bounds, c, 0).unwrap();
        assert_eq!(n.as_slice(), &[c], "{}: N({c}, 0) = {n:?}", s.name());
    }
}

/// Assert that every yielded cell is in bounds and appears once.
pub fn assert_in_bounds_and_unique(
    s: &dyn NeighbourhoodStrategy,
    bounds: &GridBounds,
    max_radius: u32,
) {
    for c in bounds.positions() {
        for r in 0..=max_radius {
            let n = s.neighbourhood(bounds, c, r).unwrap();
            let unique: IndexSet<Pos> = n.iter().copied().collect();
            assert_eq!(unique.len(), n.len(), "{}: N({c}, {r}) has duplicates", s.name());
            for p in &n {
                assert!(bounds.contains(*p), "{}: {p} outside {bounds}", s.name());
            }
        }
    }
}

/// Assert that `N(c, r) ⊆ N(c, r + 1)` for all centers and radii.
pub fn assert_subset_monotone(s: &dyn NeighbourhoodStrategy, bounds: &GridBounds, max_radius: u32) {
    for c in bounds.positions() {
        for r in 0..max_radius {
            let inner: IndexSet<Pos> = s.neighbourhood(bounds, c, r).unwrap().into_iter().collect();
            let outer: IndexSet<Pos> = s
                .neighbourhood(bounds, c, r + 1)
                .unwrap()
                .into_iter()
                .collect();
            assert!(
                inner.is_subset(&outer),
                "{}: N({c}, {r}) not a subset of N({c}, {})",
                s.name(),
                r + 1
            );
        }
    }
}

/// Assert that the disc is exactly `{p : distance(c, p) <= r}` in
/// row-major order.
pub fn assert_matches_metric(s: &dyn NeighbourhoodStrategy, bounds: &GridBounds, max_radius: u32) {
    for c in bounds.positions() {
        for r in 0..=max_radius {
            let got = s.neighbourhood(bounds, c, r).unwrap();
            let want: Vec<Pos> = bounds
                .positions()
                .filter(|p| s.distance(c, *p) <= r)
                .collect();
            assert_eq!(got.as_slice(), want.as_slice(), "{}: N({c}, {r})", s.name());
        }
    }
}

/// Assert that two calls with identical inputs agree.
pub fn assert_deterministic(s: &dyn NeighbourhoodStrategy, bounds: &GridBounds, max_radius: u32) {
    for c in bounds.positions() {
        let a = s.neighbourhood(bounds, c, max_radius).unwrap();
        let b = s.neighbourhood(bounds, c, max_radius).unwrap();
        assert_eq!(a, b, "{}: N({c}, {max_radius}) is non-deterministic", s.name());
    }
}

/// Assert `distance(a, a) == 0` and `distance(a, b) == distance(b, a)`.
pub fn assert_distance_reflexive_symmetric(s: &dyn NeighbourhoodStrategy, bounds: &GridBounds) {
    for a in bounds.positions() {
        assert_eq!(s.distance(a, a), 0, "{}: distance({a}, {a})", s.name());
        for b in bounds.positions() {
            assert_eq!(
                s.distance(a, b),
                s.distance(b, a),
                "{}: distance({a}, {b}) not symmetric",
                s.name()
            );
        }
    }
}

/// Assert that a center outside the grid is rejected.
pub fn assert_rejects_out_of_bounds_center(s: &dyn NeighbourhoodStrategy, bounds: &GridBounds) {
    let outside = [
        Pos::new(bounds.width(), 0),
        Pos::new(0, bounds.height()),
        Pos::new(u32::MAX, u32::MAX),
    ];
    for c in outside {
        assert!(
            s.neighbourhood(bounds, c, 1).is_err(),
            "{}: accepted center {c} outside {bounds}",
            s.name()
        );
    }
}

/// Run all compliance checks on a strategy.
pub fn run_full_compliance(s: &dyn NeighbourhoodStrategy, bounds: &GridBounds, max_radius: u32) {
    assert_radius_zero_singleton(s, bounds);
    assert_in_bounds_and_unique(s, bounds, max_radius);
    assert_subset_monotone(s, bounds, max_radius);
    assert_matches_metric(s, bounds, max_radius);
    assert_deterministic(s, bounds, max_radius);
    assert_distance_reflexive_symmetric(s, bounds);
    assert_rejects_out_of_bounds_center(s, bounds);
}
