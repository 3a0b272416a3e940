//! R-tree over (possibly replicated) point coordinates.
//!
//! Row positions live only inside this module and its callers in the
//! crate; public operations translate them to external ids before
//! returning.

use crate::domain::Boundary;
use indexmap::IndexMap;
use nufeb_core::PointTable;
use rstar::primitives::GeomWithData;
use rstar::RTree;

type Replica = GeomWithData<[f64; 3], usize>;

/// Spatial index over every tile replica of a point table.
///
/// Replica `t * n + row` is `row` translated by the `t`-th tile offset,
/// so `replica % n` recovers the original row.
pub(crate) struct ReplicaIndex {
    tree: RTree<Replica>,
    origins: Vec<[f64; 3]>,
    seed_r2: f64,
}

impl ReplicaIndex {
    pub(crate) fn build(points: &PointTable, boundary: &Boundary) -> Self {
        let origins: Vec<[f64; 3]> = points.iter().map(|p| p.coords()).collect();
        let n = origins.len();
        let offsets = boundary.tile_offsets();

        let mut replicas = Vec::with_capacity(n * offsets.len());
        for (tile, [dx, dy]) in offsets.iter().enumerate() {
            for (row, c) in origins.iter().enumerate() {
                replicas.push(Replica::new([c[0] + dx, c[1] + dy, c[2]], tile * n + row));
            }
        }

        let seed_r2 = seed_radius_squared(&origins);
        Self {
            tree: RTree::bulk_load(replicas),
            origins,
            seed_r2,
        }
    }

    /// Number of indexed replicas (`n` or `9n`).
    pub(crate) fn replica_count(&self) -> usize {
        self.tree.size()
    }

    /// Other rows within `radius` of `row` (inclusive), nearest first.
    pub(crate) fn within(&self, row: usize, radius: f64) -> Vec<usize> {
        self.collect(row, radius * radius)
            .into_iter()
            .map(|(other, _)| other)
            .collect()
    }

    /// The `k` rows closest to `row`, nearest first.
    pub(crate) fn nearest(&self, row: usize, k: usize) -> Vec<usize> {
        let k = k.min(self.origins.len().saturating_sub(1));
        if k == 0 {
            return Vec::new();
        }
        let mut r2 = self.seed_r2;
        loop {
            let found = self.collect(row, r2);
            if found.len() >= k {
                return found.into_iter().take(k).map(|(other, _)| other).collect();
            }
            r2 *= 4.0;
        }
    }

    /// Deduplicated `(row, squared distance)` pairs within `r2`, self
    /// excluded, ordered by distance then row.
    fn collect(&self, row: usize, r2: f64) -> Vec<(usize, f64)> {
        let n = self.origins.len();
        let mut hits: Vec<(f64, usize)> = self
            .tree
            .locate_within_distance(self.origins[row], r2)
            .map(|replica| {
                let d2 = squared(self.origins[row], *replica.geom());
                (d2, replica.data % n)
            })
            .filter(|&(_, other)| other != row)
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        // First occurrence of each row is its closest replica.
        let mut unique: IndexMap<usize, f64> = IndexMap::with_capacity(hits.len());
        for (d2, other) in hits {
            unique.entry(other).or_insert(d2);
        }
        unique.into_iter().collect()
    }
}

fn squared(a: [f64; 3], b: [f64; 3]) -> f64 {
    crate::metric::squared_distance(a, b)
}

/// Starting search radius for k-nearest expansion: the bounding-box
/// diagonal spread over the point count.
fn seed_radius_squared(origins: &[[f64; 3]]) -> f64 {
    let n = origins.len();
    if n < 2 {
        return 1.0;
    }
    let mut lo = origins[0];
    let mut hi = origins[0];
    for c in origins {
        for axis in 0..3 {
            lo[axis] = lo[axis].min(c[axis]);
            hi[axis] = hi[axis].max(c[axis]);
        }
    }
    let diag2 = crate::metric::squared_distance(lo, hi);
    if diag2 > 0.0 {
        diag2 / (n * n) as f64
    } else {
        1.0
    }
}
