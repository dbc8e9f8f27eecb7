//! Test utilities and mock types for Morpho development.
//!
//! Provides a mock [`TraitSource`] ([`MockPopulation`]), seeded random
//! population generation, and reference payoff models in [`payoffs`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod payoffs;

use std::collections::HashMap;

use morpho_core::{SpeciesId, TraitSnapshot, TraitSource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Mock implementation of [`TraitSource`].
///
/// Backed by a `HashMap<SpeciesId, (ntraits, values)>` for flexible test
/// setup. Populate species with [`set_species`](MockPopulation::set_species)
/// or [`push`](MockPopulation::push) before passing to code under test.
pub struct MockPopulation {
    species: HashMap<SpeciesId, (usize, Vec<f64>)>,
}

impl MockPopulation {
    pub fn new() -> Self {
        Self {
            species: HashMap::new(),
        }
    }

    /// Replace a species' population with flat individual-major values.
    pub fn set_species(&mut self, species: SpeciesId, ntraits: usize, values: Vec<f64>) {
        self.species.insert(species, (ntraits, values));
    }

    /// Append one individual. Registers the species on first use.
    ///
    /// Panics if `traits` does not match the species' dimensionality.
    pub fn push(&mut self, species: SpeciesId, traits: &[f64]) {
        let (ntraits, values) = self
            .species
            .entry(species)
            .or_insert_with(|| (traits.len(), Vec::new()));
        assert_eq!(*ntraits, traits.len(), "trait count mismatch for species {species}");
        values.extend_from_slice(traits);
    }

    /// Remove a species so lookups return `None`.
    pub fn remove(&mut self, species: SpeciesId) {
        self.species.remove(&species);
    }

    /// Number of individuals of `species` (0 if absent).
    pub fn size(&self, species: SpeciesId) -> usize {
        self.species
            .get(&species)
            .map_or(0, |(n, values)| values.len() / (*n).max(1))
    }
}

impl Default for MockPopulation {
    fn default() -> Self {
        Self::new()
    }
}

impl TraitSource for MockPopulation {
    fn current_trait_values(&self, species: SpeciesId) -> Option<TraitSnapshot<'_>> {
        let (ntraits, values) = self.species.get(&species)?;
        TraitSnapshot::new(values, *ntraits).ok()
    }
}

/// `size` individuals with traits drawn uniformly from `[mins[t], maxs[t]]`.
///
/// Deterministic for a given `seed`. Values are flat individual-major.
pub fn random_population(seed: u64, size: usize, mins: &[f64], maxs: &[f64]) -> Vec<f64> {
    assert_eq!(mins.len(), maxs.len(), "bounds length mismatch");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(size * mins.len());
    for _ in 0..size {
        for (&lo, &hi) in mins.iter().zip(maxs) {
            values.push(rng.random_range(lo..=hi));
        }
    }
    values
}
