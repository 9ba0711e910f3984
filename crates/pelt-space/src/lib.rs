//! Neighbourhood metrics for the Pelt automaton.
//!
//! This crate defines the [`NeighbourhoodStrategy`] trait, the one
//! polymorphism point of the engine: given grid bounds, a center and a
//! radius, a strategy enumerates every in-bounds cell within that radius
//! under its distance metric. The engine only ever counts what a strategy
//! yields, so metrics can be added without touching it.
//!
//! # Strategies
//!
//! - [`VonNeumann`]: diamond neighbourhood, Manhattan (L1) distance. The default.
//! - [`Moore`]: square neighbourhood, Chebyshev (L-inf) distance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod moore;
pub mod strategy;
pub mod von_neumann;

#[cfg(test)]
pub(crate) mod compliance;

pub use moore::Moore;
pub use strategy::{Neighbourhood, NeighbourhoodStrategy};
pub use von_neumann::VonNeumann;

/// Look up a built-in strategy by its [`name`](NeighbourhoodStrategy::name).
///
/// Host layers that expose the metric as a user setting store the name
/// and resolve it here. Returns `None` for unknown names.
pub fn strategy_from_name(name: &str) -> Option<Box<dyn NeighbourhoodStrategy>> {
    match name {
        VonNeumann::NAME => Some(Box::new(VonNeumann)),
        Moore::NAME => Some(Box::new(Moore)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_round_trips() {
        for s in [
            Box::new(VonNeumann) as Box<dyn NeighbourhoodStrategy>,
            Box::new(Moore),
        ] {
            let found = strategy_from_name(s.name()).unwrap();
            assert_eq!(found.name(), s.name());
        }
        assert!(strategy_from_name("hexagonal").is_none());
    }
}
