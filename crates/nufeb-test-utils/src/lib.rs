//! Shared fixtures for NUFEB analysis tests and benchmarks.
//!
//! Small hand-checked point tables live in [`fixtures`]; [`table`] builds
//! a [`PointTable`] from parallel columns the way a dump frame lays them
//! out.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use nufeb_core::{GroupLabel, Point, PointTable};

/// Build a table from parallel columns.
///
/// # Panics
///
/// If the columns differ in length, an id repeats, or a coordinate is not
/// finite.
pub fn table<G>(ids: &[i64], groups: &[G], x: &[f64], y: &[f64], z: &[f64]) -> PointTable
where
    G: Clone + Into<GroupLabel>,
{
    let n = ids.len();
    assert!(
        groups.len() == n && x.len() == n && y.len() == n && z.len() == n,
        "column lengths differ"
    );
    let points = (0..n)
        .map(|i| Point::new(ids[i], groups[i].clone(), [x[i], y[i], z[i]]))
        .collect();
    PointTable::new(points).expect("fixture columns are valid")
}

/// Sort each neighbor list so order-insensitive expectations compare equal.
pub fn sorted<I>(lists: I) -> Vec<(i64, Vec<i64>)>
where
    I: IntoIterator<Item = (i64, Vec<i64>)>,
{
    lists
        .into_iter()
        .map(|(id, mut nbs)| {
            nbs.sort_unstable();
            (id, nbs)
        })
        .collect()
}
