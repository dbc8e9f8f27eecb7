//! Error types for statistics queries.
//!
//! Every failure here is a caller error reported synchronously: the
//! caller decides whether to recover (e.g. reallocate a correctly shaped
//! buffer) or abort. Out-of-range trait values are not errors; they are
//! clamped into the boundary bins.

use crate::id::{SpeciesId, TraitVec};
use std::error::Error;
use std::fmt;

/// Errors from range, score, and histogram queries.
#[derive(Clone, Debug, PartialEq)]
pub enum StatsError {
    /// The species ID does not name a configured species.
    UnknownSpecies {
        /// The offending ID.
        species: SpeciesId,
    },
    /// A caller-supplied output buffer has the wrong shape.
    BufferShape {
        /// Description of the expected and actual shape.
        reason: String,
    },
    /// A trait index is outside the species' trait dimensionality.
    TraitIndexOutOfRange {
        /// The requested trait index.
        index: usize,
        /// Number of traits the species has.
        ntraits: usize,
    },
    /// The population store has no trait values for a configured species.
    PopulationUnavailable {
        /// The species whose snapshot is missing.
        species: SpeciesId,
    },
    /// The population snapshot does not match the species configuration.
    PopulationShape {
        /// Description of the mismatch.
        reason: String,
    },
    /// The payoff function produced NaN or an infinity.
    NonFinitePayoff {
        /// Species being evaluated.
        species: SpeciesId,
        /// Trait vector at which the payoff was evaluated.
        traits: TraitVec,
    },
    /// The species has too many traits for a mono score grid sweep and its
    /// payoff provides no closed-form extrema.
    SearchGridTooLarge {
        /// Species being evaluated.
        species: SpeciesId,
        /// Trait dimensionality of the species.
        ntraits: usize,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSpecies { species } => write!(f, "unknown species {species}"),
            Self::BufferShape { reason } => write!(f, "buffer shape mismatch: {reason}"),
            Self::TraitIndexOutOfRange { index, ntraits } => {
                write!(f, "trait index {index} out of range for {ntraits} trait(s)")
            }
            Self::PopulationUnavailable { species } => {
                write!(f, "no trait values available for species {species}")
            }
            Self::PopulationShape { reason } => write!(f, "population shape mismatch: {reason}"),
            Self::NonFinitePayoff { species, traits } => {
                write!(
                    f,
                    "non-finite mono payoff for species {species} at traits {:?}",
                    traits.as_slice()
                )
            }
            Self::SearchGridTooLarge { species, ntraits } => write!(
                f,
                "species {species}: {ntraits} traits are too many to sweep for mono scores"
            ),
        }
    }
}

impl Error for StatsError {}
