//! Group composition of each point's neighborhood.

use crate::domain::DomainSize;
use crate::error::SpatialError;
use crate::neighbors::{neighbors_radius, NeighborMap};
use crate::periodicity::Periodicity;
use indexmap::IndexMap;
use nufeb_core::{GroupLabel, PointId, PointTable};

/// Per-point neighbor counts, one column per group.
///
/// Rows follow the source table's row order; columns are every distinct
/// group of the source table in ascending order. A group absent from a
/// neighborhood counts as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulationStructure {
    groups: Vec<GroupLabel>,
    rows: IndexMap<PointId, Vec<u32>>,
}

impl PopulationStructure {
    /// Tally the groups of each point's neighbors.
    pub(crate) fn from_neighbors(points: &PointTable, neighbors: &NeighborMap) -> Self {
        let groups = points.groups();
        let column: IndexMap<&GroupLabel, usize> =
            groups.iter().enumerate().map(|(i, g)| (g, i)).collect();

        let mut rows: IndexMap<PointId, Vec<u32>> = points
            .ids()
            .map(|id| (id, vec![0u32; groups.len()]))
            .collect();
        for (id, nb) in neighbors.pairs() {
            let (Some(p), Some(counts)) = (points.by_id(nb), rows.get_mut(&id)) else {
                continue;
            };
            counts[column[&p.group]] += 1;
        }
        Self { groups, rows }
    }

    /// Column labels, ascending.
    pub fn groups(&self) -> &[GroupLabel] {
        &self.groups
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` for a table built from an empty point table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Counts for `id`, aligned with [`groups`](Self::groups).
    pub fn row(&self, id: PointId) -> Option<&[u32]> {
        self.rows.get(&id).map(Vec::as_slice)
    }

    /// Neighbors of `id` that belong to `group`.
    pub fn count(&self, id: PointId, group: &GroupLabel) -> Option<u32> {
        let col = self.groups.binary_search(group).ok()?;
        self.rows.get(&id).map(|counts| counts[col])
    }

    /// One group's counts in row order.
    pub fn column(&self, group: &GroupLabel) -> Option<Vec<u32>> {
        let col = self.groups.binary_search(group).ok()?;
        Some(self.rows.values().map(|counts| counts[col]).collect())
    }

    /// `(id, counts)` in row order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &[u32])> {
        self.rows.iter().map(|(&id, c)| (id, c.as_slice()))
    }
}

/// Count, for every point, its neighbors within `radius` in each group.
///
/// Built on [`neighbors_radius`]; the same validation and periodicity
/// rules apply.
///
/// # Examples
///
/// ```
/// use nufeb_core::{GroupLabel, Point, PointId, PointTable};
/// use nufeb_spatial::{local_population_structure, DomainSize, Periodicity};
///
/// let points = PointTable::new(vec![
///     Point::new(1, 1, [0.0, 0.0, 0.0]),
///     Point::new(2, 2, [1.0, 0.0, 0.0]),
///     Point::new(3, 2, [0.0, 1.0, 0.0]),
/// ])
/// .unwrap();
/// let table =
///     local_population_structure(&points, 1.0, Periodicity::None, &DomainSize::new()).unwrap();
/// assert_eq!(table.count(PointId(1), &GroupLabel::Int(2)), Some(2));
/// assert_eq!(table.count(PointId(2), &GroupLabel::Int(2)), Some(0));
/// ```
pub fn local_population_structure(
    points: &PointTable,
    radius: f64,
    periodicity: Periodicity,
    domain: &DomainSize,
) -> Result<PopulationStructure, SpatialError> {
    let neighbors = neighbors_radius(points, radius, periodicity, domain)?;
    Ok(PopulationStructure::from_neighbors(points, &neighbors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nufeb_core::Point;

    fn g(v: i64) -> GroupLabel {
        GroupLabel::Int(v)
    }

    #[test]
    fn isolated_point_has_zero_row() {
        let points = PointTable::new(vec![
            Point::new(1, 1, [0.0, 0.0, 0.0]),
            Point::new(2, 2, [1.0, 0.0, 0.0]),
            Point::new(3, 3, [10.0, 0.0, 0.0]),
        ])
        .unwrap();
        let t = local_population_structure(&points, 2.0, Periodicity::None, &DomainSize::new())
            .unwrap();
        assert_eq!(t.groups(), &[g(1), g(2), g(3)]);
        assert_eq!(t.row(PointId(1)).unwrap(), &[0, 1, 0]);
        assert_eq!(t.row(PointId(2)).unwrap(), &[1, 0, 0]);
        assert_eq!(t.row(PointId(3)).unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn own_group_is_counted_without_self() {
        let points = PointTable::new(vec![
            Point::new(5, "a", [0.0, 0.0, 0.0]),
            Point::new(6, "a", [0.5, 0.0, 0.0]),
            Point::new(7, "b", [0.0, 0.5, 0.0]),
        ])
        .unwrap();
        let t = local_population_structure(&points, 1.0, Periodicity::None, &DomainSize::new())
            .unwrap();
        let a = GroupLabel::from("a");
        let b = GroupLabel::from("b");
        assert_eq!(t.count(PointId(5), &a), Some(1));
        assert_eq!(t.count(PointId(5), &b), Some(1));
        assert_eq!(t.column(&b), Some(vec![1, 1, 0]));
        assert_eq!(t.count(PointId(5), &GroupLabel::from("c")), None);
        assert_eq!(t.count(PointId(99), &a), None);
    }

    #[test]
    fn row_sums_equal_neighbor_counts() {
        let points = PointTable::new(
            (0..20)
                .map(|i| {
                    let f = i as f64;
                    Point::new(100 - i, i % 4, [f * 0.7 % 5.0, f * 1.3 % 5.0, 0.0])
                })
                .collect(),
        )
        .unwrap();
        let domain = DomainSize::xy(5.0, 5.0);
        let map = neighbors_radius(&points, 1.5, Periodicity::XY, &domain).unwrap();
        let t = local_population_structure(&points, 1.5, Periodicity::XY, &domain).unwrap();
        for (id, nbs) in map.iter() {
            let total: u32 = t.row(id).unwrap().iter().sum();
            assert_eq!(total as usize, nbs.len());
        }
    }

    #[test]
    fn validation_errors_propagate() {
        let points = PointTable::new(vec![Point::new(1, 1, [4.0, 4.0, 0.0])]).unwrap();
        let err = local_population_structure(
            &points,
            1.0,
            Periodicity::XY,
            &DomainSize::xy(3.0, 5.0),
        )
        .unwrap_err();
        assert!(matches!(err, SpatialError::DomainSmallerThanData { .. }));
    }

    #[test]
    fn empty_table_is_empty() {
        let t = local_population_structure(
            &PointTable::default(),
            1.0,
            Periodicity::None,
            &DomainSize::new(),
        )
        .unwrap();
        assert!(t.is_empty());
        assert!(t.groups().is_empty());
    }
}
