//! Boundary traits for reading population state and payoffs.

use crate::id::SpeciesId;
use crate::snapshot::TraitSnapshot;

/// Read-only access to the population store's current trait values.
///
/// Implemented by the simulation engine. The statistics layer reads
/// through `&dyn TraitSource` rather than owning trait storage. The
/// returned snapshot must hold a single step's values; the caller is
/// responsible for not mutating the store while a statistics call runs.
pub trait TraitSource {
    /// Current trait values for `species`.
    ///
    /// Returns `None` if the store holds no population for the species.
    fn current_trait_values(&self, species: SpeciesId) -> Option<TraitSnapshot<'_>>;
}

/// Payoff of a monomorphic population.
///
/// `mono_payoff(x)` is the payoff one interaction yields to an individual
/// with strategy `x` whose partner also plays `x`. Implemented by the
/// model layer that owns the game.
///
/// # Examples
///
/// ```
/// use morpho_core::MonoPayoff;
///
/// struct Quadratic;
///
/// impl MonoPayoff for Quadratic {
///     fn mono_payoff(&self, traits: &[f64]) -> f64 {
///         let x = traits[0];
///         x * (1.0 - x)
///     }
/// }
///
/// assert_eq!(Quadratic.mono_payoff(&[0.5]), 0.25);
/// assert!(Quadratic.mono_extrema(&[0.0], &[1.0]).is_none());
/// ```
pub trait MonoPayoff: Send + Sync {
    /// Payoff per interaction when every individual plays `traits`.
    fn mono_payoff(&self, traits: &[f64]) -> f64;

    /// Closed-form `(min, max)` of [`mono_payoff`](Self::mono_payoff) over
    /// the box `[mins, maxs]`, if the model knows it.
    ///
    /// The default returns `None`, in which case the box is searched on a
    /// regular grid.
    fn mono_extrema(&self, _mins: &[f64], _maxs: &[f64]) -> Option<(f64, f64)> {
        None
    }
}
