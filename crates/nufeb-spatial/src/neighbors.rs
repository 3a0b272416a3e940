//! Radius and k-nearest neighbor queries keyed by external point id.

use crate::domain::{validate_domain, DomainSize};
use crate::error::SpatialError;
use crate::index::ReplicaIndex;
use crate::periodicity::Periodicity;
use indexmap::IndexMap;
use nufeb_core::{PointId, PointTable};
use tracing::debug;

/// Neighbors of every point, nearest first.
///
/// Keys iterate in the row order of the source table. A point never
/// appears in its own list. Points at exactly equal distance are ordered
/// by their row position in the source table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborMap {
    lists: IndexMap<PointId, Vec<PointId>>,
}

impl NeighborMap {
    /// Neighbors of `id`, or `None` if `id` was not in the table.
    pub fn get(&self, id: PointId) -> Option<&[PointId]> {
        self.lists.get(&id).map(Vec::as_slice)
    }

    /// Number of points (keys).
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// `true` for a map built from an empty table.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// `(id, neighbors)` in table row order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &[PointId])> {
        self.lists.iter().map(|(&id, v)| (id, v.as_slice()))
    }

    /// Expand into `(id, neighbor_id)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        self.lists
            .iter()
            .flat_map(|(&id, v)| v.iter().map(move |&nb| (id, nb)))
    }

    /// Consume the map and return the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<PointId, Vec<PointId>> {
        self.lists
    }
}

impl FromIterator<(PointId, Vec<PointId>)> for NeighborMap {
    fn from_iter<I: IntoIterator<Item = (PointId, Vec<PointId>)>>(iter: I) -> Self {
        Self {
            lists: iter.into_iter().collect(),
        }
    }
}

fn check_radius(radius: f64) -> Result<(), SpatialError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(SpatialError::InvalidRadius { radius })
    }
}

fn translate(points: &PointTable, rows: Vec<usize>) -> Vec<PointId> {
    rows.into_iter().map(|r| points.points()[r].id).collect()
}

/// Every other point within `radius` of each point, nearest first.
///
/// The boundary is inclusive: a point at exactly `radius` is a neighbor.
/// Under [`Periodicity::XY`] distances wrap across the x and y edges of
/// the domain.
///
/// # Errors
///
/// Domain validation errors from [`validate_domain`], or
/// [`SpatialError::InvalidRadius`] for a negative or non-finite radius.
///
/// # Examples
///
/// ```
/// use nufeb_core::{Point, PointId, PointTable};
/// use nufeb_spatial::{neighbors_radius, DomainSize, Periodicity};
///
/// let points = PointTable::new(vec![
///     Point::new(1, 1, [0.1, 0.1, 0.0]),
///     Point::new(2, 1, [4.9, 0.2, 0.0]),
///     Point::new(3, 2, [2.5, 2.5, 1.0]),
///     Point::new(4, 2, [0.2, 4.8, 0.5]),
///     Point::new(5, 3, [4.8, 7.9, 0.5]),
/// ])
/// .unwrap();
///
/// let map = neighbors_radius(&points, 2.0, Periodicity::XY, &DomainSize::xy(5.0, 9.0)).unwrap();
/// assert_eq!(map.get(PointId(1)).unwrap(), &[PointId(2), PointId(5)]);
/// assert!(map.get(PointId(3)).unwrap().is_empty());
/// ```
pub fn neighbors_radius(
    points: &PointTable,
    radius: f64,
    periodicity: Periodicity,
    domain: &DomainSize,
) -> Result<NeighborMap, SpatialError> {
    let check = validate_domain(points, periodicity, domain)?;
    check_radius(radius)?;

    let index = ReplicaIndex::build(points, &check.boundary);
    debug!(
        points = points.len(),
        replicas = index.replica_count(),
        radius,
        %periodicity,
        "radius neighbor query"
    );

    Ok(points
        .ids()
        .enumerate()
        .map(|(row, id)| (id, translate(points, index.within(row, radius))))
        .collect())
}

/// The `k` closest other points to each point, nearest first.
///
/// Lists are shorter than `k` only when the table has fewer than `k + 1`
/// points.
///
/// # Errors
///
/// Domain validation errors from [`validate_domain`].
pub fn nearest_neighbors(
    points: &PointTable,
    k: usize,
    periodicity: Periodicity,
    domain: &DomainSize,
) -> Result<NeighborMap, SpatialError> {
    let check = validate_domain(points, periodicity, domain)?;

    let index = ReplicaIndex::build(points, &check.boundary);
    debug!(
        points = points.len(),
        replicas = index.replica_count(),
        k,
        %periodicity,
        "k-nearest neighbor query"
    );

    Ok(points
        .ids()
        .enumerate()
        .map(|(row, id)| (id, translate(points, index.nearest(row, k))))
        .collect())
}
