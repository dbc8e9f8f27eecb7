//! Immutable per-species records keyed by [`SpeciesId`].

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use morpho_core::{AccountingMode, DegreeBounds, MonoPayoff, SpeciesId, StatsError};

use crate::config::{ConfigError, SpeciesConfig};
use crate::range::TraitBounds;

/// Everything the statistics layer knows about one species.
///
/// Built once from a validated [`SpeciesConfig`], with the topology
/// already reduced to its degree bounds.
#[derive(Clone)]
pub struct SpeciesRecord {
    /// Display name.
    pub name: String,
    /// Per-trait names (empty if not configured).
    pub trait_names: Vec<String>,
    /// Legal trait ranges.
    pub bounds: TraitBounds,
    /// Interaction-count range.
    pub degree: DegreeBounds,
    /// Score accounting.
    pub accounting: AccountingMode,
    /// Monomorphic payoff model.
    pub payoff: Arc<dyn MonoPayoff>,
}

impl SpeciesRecord {
    /// Trait dimensionality.
    pub fn ntraits(&self) -> usize {
        self.bounds.ntraits()
    }
}

impl fmt::Debug for SpeciesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeciesRecord")
            .field("name", &self.name)
            .field("bounds", &self.bounds)
            .field("degree", &self.degree)
            .field("accounting", &self.accounting)
            .finish_non_exhaustive()
    }
}

/// Mapping from species ID to its record, in configuration order.
#[derive(Clone, Debug, Default)]
pub struct SpeciesRegistry {
    records: IndexMap<SpeciesId, SpeciesRecord>,
}

impl SpeciesRegistry {
    /// Build the registry from species configs.
    ///
    /// Rejects duplicate IDs and invalid topologies; callers normally run
    /// [`StatsConfig::validate`](crate::StatsConfig::validate) first.
    pub fn build(species: Vec<SpeciesConfig>) -> Result<Self, ConfigError> {
        let mut records = IndexMap::with_capacity(species.len());
        for sp in species {
            let degree = sp
                .topology
                .degree_bounds()
                .map_err(|source| ConfigError::Topology {
                    species: sp.id,
                    source,
                })?;
            let record = SpeciesRecord {
                name: sp.name,
                trait_names: sp.trait_names,
                bounds: sp.bounds,
                degree,
                accounting: sp.accounting,
                payoff: sp.payoff,
            };
            if records.insert(sp.id, record).is_some() {
                return Err(ConfigError::DuplicateSpecies { species: sp.id });
            }
        }
        Ok(Self { records })
    }

    /// Look up a species record.
    pub fn get(&self, species: SpeciesId) -> Result<&SpeciesRecord, StatsError> {
        self.records
            .get(&species)
            .ok_or(StatsError::UnknownSpecies { species })
    }

    /// Configured species IDs in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = SpeciesId> + '_ {
        self.records.keys().copied()
    }

    /// Number of configured species.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no species are configured.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
