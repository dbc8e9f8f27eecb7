//! Borrowed view of one step's trait values.

use crate::error::StatsError;

/// Flat, read-only view of a population's current trait values.
///
/// Values are stored individual-major: trait `t` of individual `i` lives
/// at `values[i * ntraits + t]`. The view borrows from the population
/// store and is only valid for the duration of one statistics call.
///
/// # Examples
///
/// ```
/// use morpho_core::TraitSnapshot;
///
/// let values = [0.1, 0.9, 0.4, 0.6];
/// let snap = TraitSnapshot::new(&values, 2).unwrap();
/// assert_eq!(snap.len(), 2);
/// assert_eq!(snap.individual(1), Some(&[0.4, 0.6][..]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraitSnapshot<'a> {
    values: &'a [f64],
    ntraits: usize,
}

impl<'a> TraitSnapshot<'a> {
    /// Wrap a flat value slice holding `ntraits` values per individual.
    ///
    /// Returns `Err(StatsError::PopulationShape)` if `ntraits == 0` or
    /// the slice length is not a multiple of `ntraits`.
    pub fn new(values: &'a [f64], ntraits: usize) -> Result<Self, StatsError> {
        if ntraits == 0 {
            return Err(StatsError::PopulationShape {
                reason: "snapshot must have at least one trait".into(),
            });
        }
        if values.len() % ntraits != 0 {
            return Err(StatsError::PopulationShape {
                reason: format!(
                    "{} values do not divide into individuals of {} trait(s)",
                    values.len(),
                    ntraits
                ),
            });
        }
        Ok(Self { values, ntraits })
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.values.len() / self.ntraits
    }

    /// Returns `true` if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of traits per individual.
    pub fn ntraits(&self) -> usize {
        self.ntraits
    }

    /// The raw flat value slice.
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Trait vector of individual `i`, or `None` if out of range.
    pub fn individual(&self, i: usize) -> Option<&'a [f64]> {
        let start = i.checked_mul(self.ntraits)?;
        self.values.get(start..start.checked_add(self.ntraits)?)
    }

    /// Iterate over individuals' trait vectors in storage order.
    pub fn individuals(&self) -> std::slice::ChunksExact<'a, f64> {
        self.values.chunks_exact(self.ntraits)
    }
}
