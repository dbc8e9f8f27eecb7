//! Population statistics for continuous-strategy simulations.
//!
//! For each configured species this crate reports the legal range of
//! every trait, the extreme scores a monomorphic population can reach,
//! and histograms of the current trait distribution (per trait, or the
//! joint distribution of a trait pair laid out as a square lattice).
//!
//! Trait values are read through [`morpho_core::TraitSource`]; output
//! buffers are owned by the caller and overwritten in place.
//!
//! # Modules
//!
//! - [`range`]: trait bounds per species.
//! - [`mono`]: monomorphic score bounds.
//! - [`histogram`]: 1D and 2D trait binning into caller-owned buffers.
//! - [`config`]: species configuration and validation.
//! - [`registry`]: immutable per-species records keyed by ID.
//! - [`stats`]: the [`PopulationStats`] query surface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod histogram;
pub mod mono;
pub mod range;
pub mod registry;
pub mod stats;

pub use config::{ConfigError, SpeciesConfig, StatsConfig};
pub use histogram::{
    AxisOrientation, BinningReport, Grid2DPlan, GridShape, HistogramScale, LatticeLayout,
    ScanOrder, TraitMoments,
};
pub use mono::{MonoSearch, ScoreBounds};
pub use range::{TraitBounds, TraitRange};
pub use registry::{SpeciesRecord, SpeciesRegistry};
pub use stats::PopulationStats;
