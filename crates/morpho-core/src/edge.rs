//! Lattice edge behavior for interaction topologies.

/// How a lattice topology handles neighbours at its edges.
///
/// Determines the spread of interaction counts: on a wrapped lattice
/// every individual has the same degree, on an absorbing lattice the
/// boundary individuals have fewer partners.
///
/// # Examples
///
/// ```
/// use morpho_core::{EdgeBehavior, Topology};
///
/// let absorb = Topology::VonNeumann { rows: 4, cols: 4, edge: EdgeBehavior::Absorb };
/// let degree = absorb.degree_bounds().unwrap();
/// assert_eq!((degree.min, degree.max), (2, 4));
///
/// let wrap = Topology::VonNeumann { rows: 4, cols: 4, edge: EdgeBehavior::Wrap };
/// let degree = wrap.degree_bounds().unwrap();
/// assert_eq!((degree.min, degree.max), (4, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
}
