//! Neighbor-map invariant checks.
//!
//! These functions verify that a [`NeighborMap`] satisfies the contract of
//! the radius query: no self entries, nearest-first ordering, and exact
//! agreement with brute-force distances. Reused by the unit tests and
//! property tests of every query module.

use crate::domain::Boundary;
use crate::neighbors::NeighborMap;
use indexmap::IndexSet;
use nufeb_core::{Point, PointId, PointTable};

const EPS: f64 = 1e-9;

/// Table with ids `1..=n` in row order and groups cycling through 1, 2, 3.
pub fn table_from_coords(coords: &[(f64, f64, f64)]) -> PointTable {
    PointTable::new(
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y, z))| Point::new(i as i64 + 1, (i % 3) as i64 + 1, [x, y, z]))
            .collect(),
    )
    .expect("generated ids are unique and coordinates finite")
}

/// Assert that no point lists itself.
pub fn assert_no_self(map: &NeighborMap) {
    for (id, nbs) in map.iter() {
        assert!(!nbs.contains(&id), "{id} lists itself: {nbs:?}");
    }
}

/// Assert that no point lists the same neighbor twice.
pub fn assert_unique(map: &NeighborMap) {
    for (id, nbs) in map.iter() {
        let set: IndexSet<_> = nbs.iter().collect();
        assert_eq!(set.len(), nbs.len(), "{id} has duplicate neighbors: {nbs:?}");
    }
}

/// Assert that every list is ordered by non-decreasing distance.
pub fn assert_nearest_first(points: &PointTable, map: &NeighborMap, boundary: &Boundary) {
    for (id, nbs) in map.iter() {
        let origin = coords_of(points, id);
        let dists: Vec<f64> = nbs
            .iter()
            .map(|&nb| boundary.distance(origin, coords_of(points, nb)))
            .collect();
        for w in dists.windows(2) {
            assert!(
                w[0] <= w[1] + EPS,
                "{id}: neighbors not nearest-first: {nbs:?} at {dists:?}"
            );
        }
    }
}

/// Assert that the map agrees with a brute-force scan at `radius`.
///
/// Points farther than `radius` must be absent; points clearly inside
/// must be present. Pairs within `EPS` of the boundary are not judged.
pub fn assert_matches_brute_force(
    points: &PointTable,
    map: &NeighborMap,
    boundary: &Boundary,
    radius: f64,
) {
    assert_eq!(map.len(), points.len(), "one entry per point");
    for p in points {
        let nbs = map.get(p.id).expect("every point has an entry");
        for q in points {
            if q.id == p.id {
                continue;
            }
            let d = boundary.distance(p.coords(), q.coords());
            let listed = nbs.contains(&q.id);
            if d < radius - EPS {
                assert!(listed, "{} missing {} at distance {d} (radius {radius})", p.id, q.id);
            } else if d > radius + EPS {
                assert!(!listed, "{} lists {} at distance {d} (radius {radius})", p.id, q.id);
            }
        }
    }
}

/// Assert that `q in N(p)` implies `p in N(q)`.
pub fn assert_symmetric(map: &NeighborMap) {
    for (id, nbs) in map.iter() {
        for &nb in nbs {
            let back = map.get(nb).expect("neighbor is a key");
            assert!(
                back.contains(&id),
                "symmetry violated: {nb} in N({id}) but {id} not in N({nb})"
            );
        }
    }
}

/// Assert that every neighbor set of `small` is contained in `large`.
pub fn assert_subset(small: &NeighborMap, large: &NeighborMap) {
    for (id, nbs) in small.iter() {
        let big = large.get(id).expect("same keys");
        for nb in nbs {
            assert!(big.contains(nb), "{nb} in small N({id}) but not in large N({id})");
        }
    }
}

/// Run every single-map check for a radius query.
pub fn run_radius_compliance(
    points: &PointTable,
    map: &NeighborMap,
    boundary: &Boundary,
    radius: f64,
) {
    assert_no_self(map);
    assert_unique(map);
    assert_nearest_first(points, map, boundary);
    assert_matches_brute_force(points, map, boundary, radius);
}

fn coords_of(points: &PointTable, id: PointId) -> [f64; 3] {
    points.by_id(id).expect("id from this table").coords()
}
