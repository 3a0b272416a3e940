//! Error types for point table construction.

use crate::id::PointId;
use std::error::Error;
use std::fmt;

/// Errors detected while building a [`PointTable`](crate::PointTable).
#[derive(Clone, Debug, PartialEq)]
pub enum TableError {
    /// Two rows share the same external id.
    DuplicateId {
        /// The repeated id.
        id: PointId,
        /// Row position of the first occurrence.
        first_row: usize,
        /// Row position of the repeat.
        second_row: usize,
    },
    /// A coordinate is NaN or infinite.
    NonFiniteCoordinate {
        /// Id of the offending point.
        id: PointId,
        /// Which axis (`'x'`, `'y'` or `'z'`).
        axis: char,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId {
                id,
                first_row,
                second_row,
            } => write!(
                f,
                "duplicate point id {id} at rows {first_row} and {second_row}"
            ),
            Self::NonFiniteCoordinate { id, axis, value } => {
                write!(f, "point {id} has non-finite {axis} coordinate: {value}")
            }
        }
    }
}

impl Error for TableError {}
