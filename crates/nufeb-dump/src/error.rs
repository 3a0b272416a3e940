//! Error types for time-series analysis.

use nufeb_core::{PointId, Timestep};
use std::fmt;

/// Errors raised while building or querying a [`Timeseries`](crate::Timeseries).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DumpError {
    /// The same agent was recorded twice at one timestep.
    DuplicateRecord {
        /// Timestep of both records.
        timestep: Timestep,
        /// Repeated agent id.
        id: PointId,
    },
    /// A query needs a timestep the series does not contain.
    MissingTimestep {
        /// The absent timestep.
        timestep: Timestep,
    },
    /// Births and deaths are only defined between consecutive dumps.
    NonConsecutiveTimesteps {
        /// Last timestep before the gap.
        previous: Timestep,
        /// First timestep after the gap.
        next: Timestep,
    },
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRecord { timestep, id } => {
                write!(f, "agent {id} recorded twice at timestep {timestep}")
            }
            Self::MissingTimestep { timestep } => {
                write!(f, "no data for timestep {timestep}")
            }
            Self::NonConsecutiveTimesteps { previous, next } => write!(
                f,
                "timesteps are not consecutive: {previous} is followed by {next}"
            ),
        }
    }
}

impl std::error::Error for DumpError {}
