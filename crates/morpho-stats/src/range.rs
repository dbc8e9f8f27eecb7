//! Trait bounds per species.

use crate::config::ConfigError;
use morpho_core::TraitVec;

/// Legal interval `[min, max]` of one trait.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraitRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl TraitRange {
    /// Shorthand constructor; validation happens in [`TraitBounds::new`].
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if `value` lies in `[min, max]`. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Ordered trait ranges of one species, one per trait dimension.
///
/// Construction guarantees at least one trait and finite `min < max`
/// with a finite width on every dimension. Bounds are immutable for the
/// lifetime of a run.
///
/// # Examples
///
/// ```
/// use morpho_stats::{TraitBounds, TraitRange};
///
/// let bounds = TraitBounds::new([TraitRange::new(0.0, 1.0), TraitRange::new(-2.0, 2.0)]).unwrap();
/// assert_eq!(bounds.ntraits(), 2);
/// assert_eq!(bounds.mins(), &[0.0, -2.0]);
/// assert_eq!(bounds.maxs(), &[1.0, 2.0]);
///
/// assert!(TraitBounds::new([TraitRange::new(1.0, 1.0)]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TraitBounds {
    mins: TraitVec,
    maxs: TraitVec,
}

impl TraitBounds {
    /// Build bounds from per-trait ranges.
    pub fn new(ranges: impl IntoIterator<Item = TraitRange>) -> Result<Self, ConfigError> {
        let mut mins = TraitVec::new();
        let mut maxs = TraitVec::new();
        for (t, r) in ranges.into_iter().enumerate() {
            if !r.min.is_finite() || !r.max.is_finite() {
                return Err(ConfigError::InvalidTraits {
                    reason: format!("trait {t} bounds [{}, {}] must be finite", r.min, r.max),
                });
            }
            if r.min >= r.max {
                return Err(ConfigError::InvalidTraits {
                    reason: format!("trait {t} min {} must be below max {}", r.min, r.max),
                });
            }
            if !r.width().is_finite() {
                return Err(ConfigError::InvalidTraits {
                    reason: format!("trait {t} width of [{}, {}] overflows", r.min, r.max),
                });
            }
            mins.push(r.min);
            maxs.push(r.max);
        }
        if mins.is_empty() {
            return Err(ConfigError::InvalidTraits {
                reason: "at least one trait is required".into(),
            });
        }
        Ok(Self { mins, maxs })
    }

    /// Bounds of a single-trait species.
    pub fn single(min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new([TraitRange::new(min, max)])
    }

    /// Trait dimensionality.
    pub fn ntraits(&self) -> usize {
        self.mins.len()
    }

    /// Per-trait minima, in trait order.
    pub fn mins(&self) -> &[f64] {
        &self.mins
    }

    /// Per-trait maxima, in trait order.
    pub fn maxs(&self) -> &[f64] {
        &self.maxs
    }

    /// Range of trait `t`, or `None` if out of range.
    pub fn range(&self, t: usize) -> Option<TraitRange> {
        Some(TraitRange::new(*self.mins.get(t)?, *self.maxs.get(t)?))
    }

    /// Iterate over per-trait ranges.
    pub fn iter(&self) -> impl Iterator<Item = TraitRange> + '_ {
        self.mins
            .iter()
            .zip(self.maxs.iter())
            .map(|(&min, &max)| TraitRange::new(min, max))
    }
}
