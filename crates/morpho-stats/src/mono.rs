//! Monomorphic score bounds.
//!
//! The extreme scores of a population in which every individual plays
//! the same strategy. Computed from the trait box, the payoff model,
//! the interaction degree range, and the accounting mode. No population
//! is inspected.

use crate::range::TraitBounds;
use morpho_core::{AccountingMode, DegreeBounds, MonoPayoff, SpeciesId, StatsError, TraitVec};
use smallvec::SmallVec;

/// Grid resolution used when a payoff has no closed-form extrema.
///
/// High-dimensional species are swept more coarsely: see
/// [`samples_for`](MonoSearch::samples_for).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonoSearch {
    /// Requested sample points per trait dimension, endpoints included.
    /// Minimum: 2.
    pub samples_per_trait: usize,
}

impl MonoSearch {
    /// Upper bound on grid points for any single species.
    pub const MAX_GRID_POINTS: usize = 1 << 20;

    /// Number of grid points for a species with `ntraits` traits, or
    /// `None` on overflow.
    pub fn grid_points(&self, ntraits: usize) -> Option<usize> {
        let exp = u32::try_from(ntraits).ok()?;
        self.samples_per_trait.checked_pow(exp)
    }

    /// Samples per trait actually swept for a species with `ntraits`
    /// traits: the requested count, lowered until the grid fits in
    /// [`MAX_GRID_POINTS`](Self::MAX_GRID_POINTS). `None` if even two
    /// samples per trait do not fit.
    ///
    /// ```
    /// use morpho_stats::MonoSearch;
    ///
    /// let search = MonoSearch::default();
    /// assert_eq!(search.samples_for(2), Some(65));
    /// assert_eq!(search.samples_for(4), Some(32));
    /// assert_eq!(search.samples_for(20), Some(2));
    /// assert_eq!(search.samples_for(21), None);
    /// ```
    pub fn samples_for(&self, ntraits: usize) -> Option<usize> {
        let exp = u32::try_from(ntraits.max(1)).ok()?;
        let fits = |s: usize| s.checked_pow(exp).is_some_and(|p| p <= Self::MAX_GRID_POINTS);
        // Start just above the float estimate of the n-th root and walk down.
        let root = (Self::MAX_GRID_POINTS as f64).powf(1.0 / f64::from(exp)) as usize;
        let mut samples = self.samples_per_trait.max(2).min(root.saturating_add(1));
        while samples > 2 && !fits(samples) {
            samples -= 1;
        }
        fits(samples).then_some(samples)
    }
}

impl Default for MonoSearch {
    fn default() -> Self {
        Self {
            samples_per_trait: 65,
        }
    }
}

/// Minimum and maximum score of a monomorphic population.
///
/// `min == max` is legal: some topology/accounting combinations admit a
/// single homogeneous payoff.
///
/// # Examples
///
/// ```
/// use morpho_stats::ScoreBounds;
///
/// let b = ScoreBounds { min: -1.0, max: 3.0 };
/// assert_eq!(b.normalize(1.0), 0.5);
///
/// let flat = ScoreBounds { min: 2.0, max: 2.0 };
/// assert!(flat.is_degenerate());
/// assert_eq!(flat.normalize(2.0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBounds {
    /// Lowest attainable score.
    pub min: f64,
    /// Highest attainable score.
    pub max: f64,
}

impl ScoreBounds {
    /// Returns `true` if the range has zero width.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map `score` linearly so that `min -> 0` and `max -> 1`.
    ///
    /// A degenerate range maps every score to 0.
    pub fn normalize(&self, score: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (score - self.min) / self.span()
    }
}

/// Extreme per-interaction payoffs over the trait box.
///
/// Uses [`MonoPayoff::mono_extrema`] when available, otherwise evaluates
/// the payoff on a regular grid including both endpoints of every trait.
pub fn payoff_extrema(
    species: SpeciesId,
    payoff: &dyn MonoPayoff,
    bounds: &TraitBounds,
    search: &MonoSearch,
) -> Result<(f64, f64), StatsError> {
    if let Some((a, b)) = payoff.mono_extrema(bounds.mins(), bounds.maxs()) {
        if !a.is_finite() || !b.is_finite() {
            return Err(StatsError::NonFinitePayoff {
                species,
                traits: TraitVec::from_slice(bounds.mins()),
            });
        }
        return Ok((a.min(b), a.max(b)));
    }

    let ntraits = bounds.ntraits();
    let samples = search
        .samples_for(ntraits)
        .ok_or(StatsError::SearchGridTooLarge { species, ntraits })?;
    let mut index: SmallVec<[usize; 4]> = SmallVec::from_elem(0, ntraits);
    let mut point = TraitVec::from_slice(bounds.mins());
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut evaluated = 0usize;

    loop {
        let p = payoff.mono_payoff(&point);
        if !p.is_finite() {
            return Err(StatsError::NonFinitePayoff {
                species,
                traits: point,
            });
        }
        lo = lo.min(p);
        hi = hi.max(p);
        evaluated += 1;

        // Odometer advance over the grid; trait 0 varies fastest.
        let mut advanced = false;
        for t in 0..ntraits {
            index[t] += 1;
            if index[t] < samples {
                point[t] = grid_value(bounds.mins()[t], bounds.maxs()[t], index[t], samples);
                advanced = true;
                break;
            }
            index[t] = 0;
            point[t] = bounds.mins()[t];
        }
        if !advanced {
            break;
        }
    }

    tracing::debug!(
        species = species.0,
        samples,
        evaluated,
        payoff_min = lo,
        payoff_max = hi,
        "mono payoff sweep complete"
    );
    Ok((lo, hi))
}

fn grid_value(min: f64, max: f64, i: usize, samples: usize) -> f64 {
    if i + 1 == samples {
        max
    } else {
        min + (max - min) * (i as f64 / (samples - 1) as f64)
    }
}

/// Convert per-interaction payoff extrema into score bounds.
///
/// Averaged scores equal the payoff. Accumulated scores are linear in the
/// interaction count, so the extremes sit at the degree bounds.
pub fn score_bounds(payoff: (f64, f64), degree: DegreeBounds, mode: AccountingMode) -> ScoreBounds {
    let (pmin, pmax) = payoff;
    match mode {
        AccountingMode::Averaged => ScoreBounds {
            min: pmin,
            max: pmax,
        },
        AccountingMode::Accumulated => {
            let kmin = f64::from(degree.min);
            let kmax = f64::from(degree.max);
            ScoreBounds {
                min: (pmin * kmin).min(pmin * kmax),
                max: (pmax * kmin).max(pmax * kmax),
            }
        }
    }
}
