//! Hand-checked point tables.
//!
//! Distances quoted below are Euclidean and non-periodic unless noted.

use crate::table;
use nufeb_core::PointTable;

/// Four points in three groups, one of them a singleton in z.
///
/// Pairwise distances by id: 1-2 1.41421356, 1-3 3.60555128,
/// 1-4 6.40312424, 2-3 2.23606798, 2-4 5.91607978, 3-4 6.164414.
pub fn simple() -> PointTable {
    table(
        &[1, 2, 3, 4],
        &[1, 2, 1, 3],
        &[0.0, 1.0, 3.0, 0.0],
        &[0.0, 1.0, 2.0, 4.0],
        &[0.0, 0.0, 0.0, 5.0],
    )
}

const CORNER_X: [f64; 5] = [0.1, 4.9, 2.5, 0.2, 4.8];
const CORNER_Y: [f64; 5] = [0.1, 0.2, 2.5, 4.8, 7.9];
const CORNER_Z: [f64; 5] = [0.0, 0.0, 1.0, 0.5, 0.5];

/// Five points hugging the corners of a 5 × 9 domain.
///
/// Open distance matrix, rows and columns in id order:
///
/// ```text
/// 0.        4.80104155 3.5383612  4.72757866 9.12030701
/// 4.80104155 0.        3.47131099 6.59545298 7.71686465
/// 3.5383612  3.47131099 0.        3.29089653 5.89067059
/// 4.72757866 6.59545298 3.29089653 0.        5.5470713
/// 9.12030701 7.71686465 5.89067059 5.5470713  0.
/// ```
pub fn corners() -> PointTable {
    table(&[1, 2, 3, 4, 5], &[1, 1, 2, 2, 3], &CORNER_X, &CORNER_Y, &CORNER_Z)
}

/// [`corners`] with ids `[14, 12, 2, 25, 4]`.
pub fn corners_scattered_ids() -> PointTable {
    table(&[14, 12, 2, 25, 4], &[1, 1, 2, 2, 3], &CORNER_X, &CORNER_Y, &CORNER_Z)
}

/// Twelve planar points in a 6 × 5 domain, placed to cross the x, y and
/// diagonal boundaries.
pub fn wrapped_grid() -> PointTable {
    table(
        &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        &[1, 1, 2, 2, 3, 1, 2, 2, 1, 3, 1, 1],
        &[0.5, 1.0, 5.5, 0.5, 2.0, 2.0, 5.5, 2.0, 3.0, 0.5, 2.0, 5.5],
        &[0.5, 0.5, 0.5, 1.0, 1.0, 2.0, 2.0, 2.5, 2.5, 4.5, 4.5, 4.5],
        &[0.0; 12],
    )
}
