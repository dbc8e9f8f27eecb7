//! Strongly-typed identifiers and the [`TraitVec`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies one population in a (possibly multi-species) simulation.
///
/// IDs are assigned by the orchestration layer; the statistics layer
/// only uses them as lookup keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub u32);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SpeciesId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// One individual's continuous strategy, one value per trait.
///
/// Uses `SmallVec<[f64; 4]>` to avoid heap allocation for species
/// with up to 4 traits. Wider strategies spill to the heap transparently.
pub type TraitVec = SmallVec<[f64; 4]>;
