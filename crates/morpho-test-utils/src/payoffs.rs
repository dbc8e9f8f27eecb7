//! Reference monomorphic payoff models.
//!
//! - [`ConstantPayoff`]: trait-independent payoff, optionally with
//!   (deliberately arbitrary) closed-form extrema.
//! - [`LinearPayoff`]: `offset + w · x`.
//! - [`SnowdriftPayoff`]: continuous snowdrift game, `B(2x) - C(x)` for a
//!   single investment trait.

use morpho_core::MonoPayoff;

/// Same payoff for every strategy.
#[derive(Clone, Debug)]
pub struct ConstantPayoff {
    pub value: f64,
    extrema: Option<(f64, f64)>,
}

impl ConstantPayoff {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            extrema: None,
        }
    }

    /// Report `(a, b)` from `mono_extrema` instead of sweeping.
    pub fn with_extrema(mut self, a: f64, b: f64) -> Self {
        self.extrema = Some((a, b));
        self
    }
}

impl MonoPayoff for ConstantPayoff {
    fn mono_payoff(&self, _traits: &[f64]) -> f64 {
        self.value
    }

    fn mono_extrema(&self, _mins: &[f64], _maxs: &[f64]) -> Option<(f64, f64)> {
        self.extrema
    }
}

/// Payoff linear in the traits: `offset + Σ weights[t] * x[t]`.
#[derive(Clone, Debug)]
pub struct LinearPayoff {
    pub weights: Vec<f64>,
    pub offset: f64,
}

impl LinearPayoff {
    pub fn new(weights: Vec<f64>, offset: f64) -> Self {
        Self { weights, offset }
    }
}

impl MonoPayoff for LinearPayoff {
    fn mono_payoff(&self, traits: &[f64]) -> f64 {
        self.offset
            + self
                .weights
                .iter()
                .zip(traits)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

/// Continuous snowdrift game with quadratic benefit and cost.
///
/// `B(z) = b2 z² + b1 z`, `C(x) = c2 x² + c1 x`. Two individuals
/// investing `x` and `y` earn `B(x + y) - C(x)`, so a monomorphic
/// population at `x` earns `B(2x) - C(x)`.
#[derive(Clone, Copy, Debug)]
pub struct SnowdriftPayoff {
    pub b1: f64,
    pub b2: f64,
    pub c1: f64,
    pub c2: f64,
}

impl SnowdriftPayoff {
    fn benefit(&self, z: f64) -> f64 {
        (self.b2 * z + self.b1) * z
    }

    fn cost(&self, x: f64) -> f64 {
        (self.c2 * x + self.c1) * x
    }
}

impl MonoPayoff for SnowdriftPayoff {
    fn mono_payoff(&self, traits: &[f64]) -> f64 {
        let x = traits[0];
        self.benefit(2.0 * x) - self.cost(x)
    }
}
