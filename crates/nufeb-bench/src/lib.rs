//! Benchmark workloads for the NUFEB analysis crates.
//!
//! - [`colony`]: seeded random agents inside a box
//! - [`growth_series`]: a seeded population that divides and dies over time

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use nufeb_core::{Point, PointTable, Timestep};
use nufeb_dump::{AgentRecord, Timeseries};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `n` agents spread uniformly over `[0, len)` on each axis, ids `1..=n`,
/// groups cycling through `1..=groups`.
pub fn colony(n: usize, len: [f64; 3], groups: i64, seed: u64) -> PointTable {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let groups = groups.max(1);
    let points = (0..n as i64)
        .map(|i| {
            let xyz = [
                rng.random::<f64>() * len[0],
                rng.random::<f64>() * len[1],
                rng.random::<f64>() * len[2],
            ];
            Point::new(i + 1, i % groups + 1, xyz)
        })
        .collect();
    match PointTable::new(points) {
        Ok(t) => t,
        // Ids are sequential and coordinates are finite by construction.
        Err(e) => unreachable!("{e}"),
    }
}

/// A population of `initial` agents over `steps` consecutive timesteps.
///
/// Each step every agent dies with probability `death` and divides with
/// probability `birth`; offspring take fresh ids and the parent's group.
///
/// # Panics
///
/// If `birth` or `death` is outside `[0, 1]`.
pub fn growth_series(initial: usize, steps: u64, birth: f64, death: f64, seed: u64) -> Timeseries {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut alive: Vec<(i64, i64)> = (0..initial as i64).map(|i| (i, i % 3 + 1)).collect();
    let mut next_id = initial as i64;
    let mut records = Vec::new();
    for t in 0..steps {
        records.extend(alive.iter().map(|&(id, g)| AgentRecord::new(t, id, g)));
        let mut survivors = Vec::with_capacity(alive.len());
        for (id, g) in alive {
            if rng.random_bool(death) {
                continue;
            }
            survivors.push((id, g));
            if rng.random_bool(birth) {
                survivors.push((next_id, g));
                next_id += 1;
            }
        }
        alive = survivors;
    }
    match Timeseries::from_parts((0..steps).map(Timestep), records) {
        Ok(ts) => ts,
        // Each id is emitted once per step.
        Err(e) => unreachable!("{e}"),
    }
}
