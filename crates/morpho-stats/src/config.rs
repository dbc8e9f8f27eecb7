//! Species configuration, validation, and error types.
//!
//! [`StatsConfig`] is the builder-input for [`PopulationStats`](crate::PopulationStats).
//! [`validate()`](StatsConfig::validate) checks every structural invariant
//! up front so that queries can only fail on caller errors.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use morpho_core::{AccountingMode, MonoPayoff, SpeciesId, Topology, TopologyError};

use crate::histogram::{HistogramScale, LatticeLayout};
use crate::mono::MonoSearch;
use crate::range::TraitBounds;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`StatsConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// No species configured.
    NoSpecies,
    /// Two species share an ID.
    DuplicateSpecies {
        /// The repeated ID.
        species: SpeciesId,
    },
    /// Trait bounds or trait names are invalid.
    InvalidTraits {
        /// Description of the validation failure.
        reason: String,
    },
    /// The species' interaction topology is invalid.
    Topology {
        /// Species whose topology failed.
        species: SpeciesId,
        /// The underlying topology error.
        source: TopologyError,
    },
    /// `MonoSearch` invariant violated.
    InvalidMonoSearch {
        /// Description of which invariant was violated.
        reason: String,
    },
    /// A species without closed-form mono extrema has so many traits
    /// that even two samples per trait exceed
    /// [`MonoSearch::MAX_GRID_POINTS`].
    SearchGridTooLarge {
        /// Species whose grid is too large.
        species: SpeciesId,
        /// Trait dimensionality of the species.
        ntraits: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSpecies => write!(f, "no species configured"),
            Self::DuplicateSpecies { species } => write!(f, "duplicate species id {species}"),
            Self::InvalidTraits { reason } => write!(f, "invalid traits: {reason}"),
            Self::Topology { species, source } => {
                write!(f, "species {species} topology: {source}")
            }
            Self::InvalidMonoSearch { reason } => write!(f, "invalid mono search: {reason}"),
            Self::SearchGridTooLarge { species, ntraits } => write!(
                f,
                "species {species}: 2^{ntraits} grid points exceed {} without closed-form extrema",
                MonoSearch::MAX_GRID_POINTS
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Topology { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ── SpeciesConfig ──────────────────────────────────────────────────

/// Configuration of one species.
///
/// Bounds, topology and accounting are fixed for the run. The payoff
/// model is shared with the simulation engine that owns the game.
#[derive(Clone)]
pub struct SpeciesConfig {
    /// Lookup key assigned by the orchestration layer.
    pub id: SpeciesId,
    /// Display name.
    pub name: String,
    /// Optional per-trait names. Either empty or one per trait.
    pub trait_names: Vec<String>,
    /// Legal range of every trait.
    pub bounds: TraitBounds,
    /// Interaction graph the species plays on.
    pub topology: Topology,
    /// How payoffs are turned into scores.
    pub accounting: AccountingMode,
    /// Payoff of a monomorphic population.
    pub payoff: Arc<dyn MonoPayoff>,
}

impl SpeciesConfig {
    /// Species with no trait names, averaged accounting, and a well-mixed
    /// topology of `size` individuals.
    pub fn new(
        id: SpeciesId,
        bounds: TraitBounds,
        size: u32,
        payoff: Arc<dyn MonoPayoff>,
    ) -> Self {
        Self {
            id,
            name: format!("species {id}"),
            trait_names: Vec::new(),
            bounds,
            topology: Topology::WellMixed { size },
            accounting: AccountingMode::Averaged,
            payoff,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let ntraits = self.bounds.ntraits();
        if !self.trait_names.is_empty() && self.trait_names.len() != ntraits {
            return Err(ConfigError::InvalidTraits {
                reason: format!(
                    "species {} has {} trait name(s) for {} trait(s)",
                    self.id,
                    self.trait_names.len(),
                    ntraits
                ),
            });
        }
        self.topology
            .degree_bounds()
            .map_err(|source| ConfigError::Topology {
                species: self.id,
                source,
            })?;
        Ok(())
    }
}

impl fmt::Debug for SpeciesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeciesConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("trait_names", &self.trait_names)
            .field("bounds", &self.bounds)
            .field("topology", &self.topology)
            .field("accounting", &self.accounting)
            .finish_non_exhaustive()
    }
}

// ── StatsConfig ────────────────────────────────────────────────────

/// Complete configuration for [`PopulationStats`](crate::PopulationStats).
#[derive(Clone, Debug)]
pub struct StatsConfig {
    /// Configured species, in display order.
    pub species: Vec<SpeciesConfig>,
    /// Grid resolution for mono score sweeps.
    pub mono_search: MonoSearch,
    /// 2D histogram buffer layout.
    pub layout: LatticeLayout,
    /// Histogram scaling.
    pub scale: HistogramScale,
}

impl StatsConfig {
    /// Configuration with default search, layout, and scale.
    pub fn new(species: Vec<SpeciesConfig>) -> Self {
        Self {
            species,
            mono_search: MonoSearch::default(),
            layout: LatticeLayout::default(),
            scale: HistogramScale::default(),
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one species.
        if self.species.is_empty() {
            return Err(ConfigError::NoSpecies);
        }
        // 2. Search resolution must include both endpoints.
        let samples = self.mono_search.samples_per_trait;
        if samples < 2 {
            return Err(ConfigError::InvalidMonoSearch {
                reason: format!("samples_per_trait must be at least 2, got {samples}"),
            });
        }
        let mut seen = IndexSet::with_capacity(self.species.len());
        for sp in &self.species {
            // 3. Unique IDs.
            if !seen.insert(sp.id) {
                return Err(ConfigError::DuplicateSpecies { species: sp.id });
            }
            // 4. Per-species checks.
            sp.validate()?;
            // 5. Payoffs without closed-form extrema must be sweepable.
            let ntraits = sp.bounds.ntraits();
            let closed_form = sp
                .payoff
                .mono_extrema(sp.bounds.mins(), sp.bounds.maxs())
                .is_some();
            if !closed_form && self.mono_search.samples_for(ntraits).is_none() {
                return Err(ConfigError::SearchGridTooLarge {
                    species: sp.id,
                    ntraits,
                });
            }
        }
        Ok(())
    }
}
