//! Morpho: population statistics for continuous-trait evolutionary games.
//!
//! Top-level facade that re-exports the public API of the Morpho
//! sub-crates. Adding `morpho` as a single dependency is sufficient for
//! most users.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use morpho::prelude::*;
//!
//! // A payoff that rewards investment linearly.
//! struct Linear;
//! impl MonoPayoff for Linear {
//!     fn mono_payoff(&self, traits: &[f64]) -> f64 { traits[0] - 0.5 * traits[1] }
//! }
//!
//! // The population store owned by the simulation.
//! struct Store(Vec<f64>);
//! impl TraitSource for Store {
//!     fn current_trait_values(&self, _: SpeciesId) -> Option<TraitSnapshot<'_>> {
//!         TraitSnapshot::new(&self.0, 2).ok()
//!     }
//! }
//!
//! let id = SpeciesId(0);
//! let bounds = TraitBounds::new([TraitRange::new(0.0, 1.0), TraitRange::new(0.0, 1.0)]).unwrap();
//! let mut species = SpeciesConfig::new(id, bounds, 16, Arc::new(Linear));
//! species.topology = Topology::VonNeumann { rows: 4, cols: 4, edge: EdgeBehavior::Wrap };
//! species.accounting = AccountingMode::Accumulated;
//! let stats = PopulationStats::new(StatsConfig::new(vec![species])).unwrap();
//!
//! // Payoff spans [-0.5, 1.0]; every site has 4 neighbours.
//! assert_eq!(stats.min_mono_score(id).unwrap(), -2.0);
//! assert_eq!(stats.max_mono_score(id).unwrap(), 4.0);
//!
//! let store = Store(vec![0.1, 0.9, 0.6, 0.4, 0.8, 0.2]);
//! let mut grid = vec![0.0; 4];
//! stats.trait_2d_histogram(id, &store, &mut grid, 0, 1).unwrap();
//! assert_eq!(grid, vec![0.0, 1.0, 2.0, 0.0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `morpho-core` | IDs, snapshots, topologies, errors, boundary traits |
//! | [`stats`] | `morpho-stats` | Configuration, mono scores, histograms, the query surface |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`morpho-core`).
///
/// Contains [`types::SpeciesId`], [`types::TraitSnapshot`], interaction
/// topologies, [`types::StatsError`], and the boundary traits
/// ([`types::TraitSource`], [`types::MonoPayoff`]).
pub use morpho_core as types;

/// Configuration and statistics queries (`morpho-stats`).
///
/// Build a [`stats::StatsConfig`], hand it to
/// [`stats::PopulationStats::new`], and query trait ranges, mono score
/// bounds, and histograms.
pub use morpho_stats as stats;

/// Common imports for typical Morpho usage.
///
/// ```rust
/// use morpho::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use morpho_core::{
        AccountingMode, EdgeBehavior, MonoPayoff, SpeciesId, Topology, TraitSnapshot,
        TraitSource,
    };

    // Errors
    pub use morpho_core::StatsError;
    pub use morpho_stats::ConfigError;

    // Configuration
    pub use morpho_stats::{SpeciesConfig, StatsConfig, TraitBounds, TraitRange};

    // Queries
    pub use morpho_stats::{BinningReport, GridShape, PopulationStats, ScoreBounds};
}
