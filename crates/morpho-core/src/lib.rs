//! Core types and traits for Morpho population statistics.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the statistics layer and the simulation
//! engine that feeds it: species IDs, trait vectors and snapshots,
//! interaction topology, error types, and the boundary traits through
//! which trait values and payoffs are read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod id;
pub mod interaction;
pub mod snapshot;
pub mod traits;

pub use edge::EdgeBehavior;
pub use error::StatsError;
pub use id::{SpeciesId, TraitVec};
pub use interaction::{AccountingMode, DegreeBounds, Topology, TopologyError};
pub use snapshot::TraitSnapshot;
pub use traits::{MonoPayoff, TraitSource};
