//! The [`PopulationStats`] query surface.

use morpho_core::{
    AccountingMode, DegreeBounds, SpeciesId, StatsError, TraitSnapshot, TraitSource,
};
use smallvec::SmallVec;

use crate::config::{ConfigError, StatsConfig};
use crate::histogram::{
    self, BinningReport, Grid2DPlan, GridShape, HistogramScale, LatticeLayout, TraitMoments,
};
use crate::mono::{self, MonoSearch, ScoreBounds};
use crate::registry::{SpeciesRecord, SpeciesRegistry};

/// Trait ranges, monomorphic score bounds, and trait histograms for every
/// configured species.
///
/// Holds only configuration-derived state. Every query is a synchronous
/// read of that state plus, for histograms, one snapshot from the caller's
/// [`TraitSource`]. Mono scores are recomputed on every call.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use morpho_core::{MonoPayoff, SpeciesId, TraitSnapshot, TraitSource};
/// use morpho_stats::{PopulationStats, SpeciesConfig, StatsConfig, TraitBounds};
///
/// struct Flat;
/// impl MonoPayoff for Flat {
///     fn mono_payoff(&self, _: &[f64]) -> f64 { 1.0 }
/// }
///
/// struct Store(Vec<f64>);
/// impl TraitSource for Store {
///     fn current_trait_values(&self, _: SpeciesId) -> Option<TraitSnapshot<'_>> {
///         TraitSnapshot::new(&self.0, 1).ok()
///     }
/// }
///
/// let id = SpeciesId(0);
/// let bounds = TraitBounds::single(0.0, 10.0).unwrap();
/// let config = StatsConfig::new(vec![SpeciesConfig::new(id, bounds, 6, Arc::new(Flat))]);
/// let stats = PopulationStats::new(config).unwrap();
///
/// assert_eq!(stats.trait_min(id).unwrap(), &[0.0]);
/// assert_eq!(stats.min_mono_score(id).unwrap(), stats.max_mono_score(id).unwrap());
///
/// let store = Store(vec![0.0, 2.0, 4.9, 5.0, 9.99, 10.0]);
/// let mut bins = vec![vec![0.0; 5]];
/// stats.trait_histogram(id, &store, &mut bins).unwrap();
/// assert_eq!(bins[0], vec![1.0, 1.0, 2.0, 0.0, 2.0]);
/// ```
#[derive(Clone, Debug)]
pub struct PopulationStats {
    registry: SpeciesRegistry,
    mono_search: MonoSearch,
    layout: LatticeLayout,
    scale: HistogramScale,
}

impl PopulationStats {
    /// Validate `config` and build the species registry.
    pub fn new(config: StatsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let StatsConfig {
            species,
            mono_search,
            layout,
            scale,
        } = config;
        let registry = SpeciesRegistry::build(species)?;
        tracing::debug!(
            species = registry.len(),
            samples_per_trait = mono_search.samples_per_trait,
            ?layout,
            ?scale,
            "population stats configured"
        );
        Ok(Self {
            registry,
            mono_search,
            layout,
            scale,
        })
    }

    /// The species registry.
    pub fn registry(&self) -> &SpeciesRegistry {
        &self.registry
    }

    /// 2D histogram buffer layout.
    pub fn layout(&self) -> LatticeLayout {
        self.layout
    }

    /// Histogram scaling.
    pub fn scale(&self) -> HistogramScale {
        self.scale
    }

    // ── Trait ranges ───────────────────────────────────────────────

    /// Number of traits of `species`.
    pub fn ntraits(&self, species: SpeciesId) -> Result<usize, StatsError> {
        Ok(self.registry.get(species)?.ntraits())
    }

    /// Configured per-trait names (empty if none were given).
    pub fn trait_names(&self, species: SpeciesId) -> Result<&[String], StatsError> {
        Ok(&self.registry.get(species)?.trait_names)
    }

    /// Minimum legal value of every trait, in trait order.
    pub fn trait_min(&self, species: SpeciesId) -> Result<&[f64], StatsError> {
        Ok(self.registry.get(species)?.bounds.mins())
    }

    /// Maximum legal value of every trait, in trait order.
    pub fn trait_max(&self, species: SpeciesId) -> Result<&[f64], StatsError> {
        Ok(self.registry.get(species)?.bounds.maxs())
    }

    // ── Mono scores ────────────────────────────────────────────────

    /// Interaction-count range of `species`.
    pub fn degree_bounds(&self, species: SpeciesId) -> Result<DegreeBounds, StatsError> {
        Ok(self.registry.get(species)?.degree)
    }

    /// Payoff accounting of `species`.
    pub fn accounting_mode(&self, species: SpeciesId) -> Result<AccountingMode, StatsError> {
        Ok(self.registry.get(species)?.accounting)
    }

    /// Lowest and highest score of a monomorphic population of `species`.
    pub fn mono_score_bounds(&self, species: SpeciesId) -> Result<ScoreBounds, StatsError> {
        let record = self.registry.get(species)?;
        let payoff = mono::payoff_extrema(
            species,
            record.payoff.as_ref(),
            &record.bounds,
            &self.mono_search,
        )?;
        let bounds = mono::score_bounds(payoff, record.degree, record.accounting);
        if bounds.is_degenerate() {
            tracing::debug!(species = species.0, score = bounds.min, "single mono score");
        }
        Ok(bounds)
    }

    /// Lowest score of a monomorphic population of `species`.
    pub fn min_mono_score(&self, species: SpeciesId) -> Result<f64, StatsError> {
        Ok(self.mono_score_bounds(species)?.min)
    }

    /// Highest score of a monomorphic population of `species`.
    pub fn max_mono_score(&self, species: SpeciesId) -> Result<f64, StatsError> {
        Ok(self.mono_score_bounds(species)?.max)
    }

    // ── Histograms ─────────────────────────────────────────────────

    /// One histogram per trait, written into `bins[t]`.
    ///
    /// `bins` must hold one non-empty row per trait. Each row's length is
    /// that trait's bin count. All rows are overwritten.
    pub fn trait_histogram(
        &self,
        species: SpeciesId,
        source: &dyn TraitSource,
        bins: &mut [Vec<f64>],
    ) -> Result<BinningReport, StatsError> {
        let record = self.registry.get(species)?;
        let snapshot = fetch_snapshot(species, record, source)?;
        let report = histogram::histogram_1d_into(&snapshot, &record.bounds, self.scale, bins)?;
        log_report(species, &report);
        Ok(report)
    }

    /// Joint histogram of `trait1` and `trait2` in a square grid.
    ///
    /// The grid side is inferred from `bins.len()`, which must be a
    /// perfect square for multi-trait species. Single-trait species ignore
    /// the trait indices and fill `bins` as an `N x 1` grid, identical to
    /// [`trait_histogram`](Self::trait_histogram).
    pub fn trait_2d_histogram(
        &self,
        species: SpeciesId,
        source: &dyn TraitSource,
        bins: &mut [f64],
        trait1: usize,
        trait2: usize,
    ) -> Result<BinningReport, StatsError> {
        self.bin_2d(species, source, bins, trait1, trait2, None)
    }

    /// Joint histogram of `trait1` and `trait2` in a grid of `shape`.
    ///
    /// `shape.rows * shape.cols` must equal `bins.len()`. For single-trait
    /// species one axis of `shape` must be 1.
    pub fn trait_2d_histogram_with_shape(
        &self,
        species: SpeciesId,
        source: &dyn TraitSource,
        bins: &mut [f64],
        trait1: usize,
        trait2: usize,
        shape: GridShape,
    ) -> Result<BinningReport, StatsError> {
        self.bin_2d(species, source, bins, trait1, trait2, Some(shape))
    }

    fn bin_2d(
        &self,
        species: SpeciesId,
        source: &dyn TraitSource,
        bins: &mut [f64],
        trait1: usize,
        trait2: usize,
        shape: Option<GridShape>,
    ) -> Result<BinningReport, StatsError> {
        let record = self.registry.get(species)?;
        let plan = Grid2DPlan::resolve(
            record.ntraits(),
            bins.len(),
            trait1,
            trait2,
            shape,
            self.layout.orientation,
        )?;
        let snapshot = fetch_snapshot(species, record, source)?;
        let report = histogram::histogram_2d_into(
            &snapshot,
            &record.bounds,
            &plan,
            self.layout.order,
            self.scale,
            bins,
        )?;
        log_report(species, &report);
        Ok(report)
    }

    /// Mean and standard deviation of every trait in the current population.
    pub fn mean_traits(
        &self,
        species: SpeciesId,
        source: &dyn TraitSource,
    ) -> Result<SmallVec<[TraitMoments; 4]>, StatsError> {
        let record = self.registry.get(species)?;
        let snapshot = fetch_snapshot(species, record, source)?;
        Ok(histogram::trait_moments(&snapshot))
    }
}

/// Read the current snapshot and check it against the species record.
fn fetch_snapshot<'s>(
    species: SpeciesId,
    record: &SpeciesRecord,
    source: &'s dyn TraitSource,
) -> Result<TraitSnapshot<'s>, StatsError> {
    let snapshot = source
        .current_trait_values(species)
        .ok_or(StatsError::PopulationUnavailable { species })?;
    if snapshot.ntraits() != record.ntraits() {
        return Err(StatsError::PopulationShape {
            reason: format!(
                "species {species} has {} trait(s), population store reports {}",
                record.ntraits(),
                snapshot.ntraits()
            ),
        });
    }
    Ok(snapshot)
}

fn log_report(species: SpeciesId, report: &BinningReport) {
    if report.non_finite > 0 {
        tracing::warn!(
            species = species.0,
            non_finite = report.non_finite,
            "NaN trait values binned into first bin"
        );
    }
    if report.clamped > 0 {
        tracing::debug!(
            species = species.0,
            clamped = report.clamped,
            population = report.population,
            "trait values clamped into boundary bins"
        );
    }
}
