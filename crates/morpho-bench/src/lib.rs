//! Benchmark profiles for the Morpho statistics layer.
//!
//! - [`reference_profile`]: one 2-trait species on a 100x100 lattice, with a
//!   10K-individual population
//! - [`stress_profile`]: 4-trait species, ~100K individuals
//! - [`reference_population`]: deterministic population for either profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use morpho_core::{AccountingMode, EdgeBehavior, SpeciesId, Topology};
use morpho_stats::{SpeciesConfig, StatsConfig, TraitBounds, TraitRange};
use morpho_test_utils::payoffs::LinearPayoff;
use morpho_test_utils::{random_population, MockPopulation};

/// The single species used by every profile.
pub const SPECIES: SpeciesId = SpeciesId(0);

/// 2 traits, von Neumann 100x100 lattice, accumulated payoffs.
pub fn reference_profile() -> StatsConfig {
    profile(2, 100)
}

/// 4 traits, von Neumann 316x316 lattice, accumulated payoffs.
pub fn stress_profile() -> StatsConfig {
    profile(4, 316)
}

fn profile(ntraits: usize, side: u32) -> StatsConfig {
    let bounds = TraitBounds::new((0..ntraits).map(|t| TraitRange::new(0.0, 1.0 + t as f64)))
        .expect("profile bounds are valid");
    let weights = (0..ntraits).map(|t| 1.0 / (t + 1) as f64).collect();
    let mut sp = SpeciesConfig::new(
        SPECIES,
        bounds,
        side * side,
        Arc::new(LinearPayoff::new(weights, -0.5)),
    );
    sp.topology = Topology::VonNeumann {
        rows: side,
        cols: side,
        edge: EdgeBehavior::Absorb,
    };
    sp.accounting = AccountingMode::Accumulated;
    StatsConfig::new(vec![sp])
}

/// A deterministic population matching `config`'s first species.
///
/// Lattice profiles fill every site; values are drawn uniformly from the
/// configured trait ranges.
pub fn reference_population(config: &StatsConfig, seed: u64) -> MockPopulation {
    let sp = &config.species[0];
    let size = match sp.topology {
        Topology::VonNeumann { rows, cols, .. } => rows as usize * cols as usize,
        _ => 10_000,
    };
    let values = random_population(seed, size, sp.bounds.mins(), sp.bounds.maxs());
    let mut pop = MockPopulation::new();
    pop.set_species(sp.id, sp.bounds.ntraits(), values);
    pop
}
