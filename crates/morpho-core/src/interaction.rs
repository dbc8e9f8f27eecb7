//! Interaction topology and payoff accounting facts.
//!
//! The statistics layer never walks the interaction graph. It only needs
//! the range of interaction counts ([`DegreeBounds`]) and how payoffs are
//! turned into scores ([`AccountingMode`]). [`Topology`] derives degree
//! bounds for the common graph families.

use crate::edge::EdgeBehavior;
use std::error::Error;
use std::fmt;

/// How an individual's score is formed from its interaction payoffs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccountingMode {
    /// Score is the mean payoff per interaction.
    #[default]
    Averaged,
    /// Score is the sum of payoffs over all interactions.
    Accumulated,
}

/// Minimum and maximum number of interaction partners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DegreeBounds {
    /// Fewest partners any individual has.
    pub min: u32,
    /// Most partners any individual has.
    pub max: u32,
}

impl DegreeBounds {
    /// Degree bounds with `min <= max`.
    pub fn new(min: u32, max: u32) -> Result<Self, TopologyError> {
        if min > max {
            return Err(TopologyError::InvalidDegreeBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Every individual has exactly `k` partners.
    pub fn regular(k: u32) -> Self {
        Self { min: k, max: k }
    }

    /// Returns `true` if all individuals have the same degree.
    pub fn is_regular(&self) -> bool {
        self.min == self.max
    }
}

/// Errors from topology description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// The topology has no individuals.
    EmptyTopology,
    /// `min > max`.
    InvalidDegreeBounds {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTopology => write!(f, "topology must have at least one individual"),
            Self::InvalidDegreeBounds { min, max } => {
                write!(f, "degree min {min} exceeds max {max}")
            }
        }
    }
}

impl Error for TopologyError {}

/// Interaction graph family from which degree bounds are derived.
///
/// Lattice dimensions are given in individuals per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Every individual interacts with every other one.
    WellMixed {
        /// Population size.
        size: u32,
    },
    /// 1D line lattice.
    Line {
        /// Number of individuals.
        len: u32,
        /// Edge handling.
        edge: EdgeBehavior,
    },
    /// 1D periodic lattice.
    Ring {
        /// Number of individuals.
        len: u32,
    },
    /// 2D square lattice with 4-neighbourhoods.
    VonNeumann {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
        /// Edge handling.
        edge: EdgeBehavior,
    },
    /// 2D square lattice with 8-neighbourhoods.
    Moore {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
        /// Edge handling.
        edge: EdgeBehavior,
    },
    /// Degree bounds measured on an arbitrary graph.
    Explicit(DegreeBounds),
}

impl Topology {
    /// Interaction-count range for this topology.
    pub fn degree_bounds(&self) -> Result<DegreeBounds, TopologyError> {
        match *self {
            Self::WellMixed { size } => {
                nonzero(size)?;
                Ok(DegreeBounds::regular(size - 1))
            }
            Self::Line { len, edge } => {
                let (lo, hi) = axis_degree(len, edge)?;
                Ok(DegreeBounds { min: lo, max: hi })
            }
            Self::Ring { len } => {
                let (lo, hi) = axis_degree(len, EdgeBehavior::Wrap)?;
                Ok(DegreeBounds { min: lo, max: hi })
            }
            Self::VonNeumann { rows, cols, edge } => {
                let (r_lo, r_hi) = axis_degree(rows, edge)?;
                let (c_lo, c_hi) = axis_degree(cols, edge)?;
                Ok(DegreeBounds {
                    min: r_lo + c_lo,
                    max: r_hi + c_hi,
                })
            }
            Self::Moore { rows, cols, edge } => {
                let (r_lo, r_hi) = axis_degree(rows, edge)?;
                let (c_lo, c_hi) = axis_degree(cols, edge)?;
                Ok(DegreeBounds {
                    min: (1 + r_lo) * (1 + c_lo) - 1,
                    max: (1 + r_hi) * (1 + c_hi) - 1,
                })
            }
            Self::Explicit(bounds) => DegreeBounds::new(bounds.min, bounds.max),
        }
    }
}

fn nonzero(n: u32) -> Result<(), TopologyError> {
    if n == 0 {
        Err(TopologyError::EmptyTopology)
    } else {
        Ok(())
    }
}

/// Distinct neighbours along one lattice axis of length `len`: `(edge, interior)`.
fn axis_degree(len: u32, edge: EdgeBehavior) -> Result<(u32, u32), TopologyError> {
    nonzero(len)?;
    let interior = (len - 1).min(2);
    let boundary = match edge {
        EdgeBehavior::Wrap => interior,
        EdgeBehavior::Absorb => (len - 1).min(1),
    };
    Ok((boundary, interior))
}
