//! Agents at a single timepoint and the immutable table that holds them.

use crate::error::TableError;
use crate::id::{GroupLabel, PointId};
use indexmap::IndexMap;

/// One simulated agent at one timepoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// External identifier.
    pub id: PointId,
    /// Taxon or type label.
    pub group: GroupLabel,
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
    /// z coordinate.
    pub z: f64,
}

impl Point {
    /// Create a point from an id, a group label, and `[x, y, z]`.
    pub fn new(id: i64, group: impl Into<GroupLabel>, xyz: [f64; 3]) -> Self {
        Self {
            id: PointId(id),
            group: group.into(),
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Coordinates as an array.
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Immutable snapshot of every agent at one timepoint.
///
/// Rows keep the order they were supplied in. Each row's external id is
/// indexed so analysis code can translate between row positions and ids
/// without ever exposing row positions to callers.
///
/// # Examples
///
/// ```
/// use nufeb_core::{Point, PointId, PointTable};
///
/// let table = PointTable::new(vec![
///     Point::new(14, 1, [0.1, 0.1, 0.0]),
///     Point::new(2, 2, [2.5, 2.5, 1.0]),
/// ])
/// .unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.row_of(PointId(2)), Some(1));
/// assert_eq!(table.max_x(), Some(2.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointTable {
    points: Vec<Point>,
    rows: IndexMap<PointId, usize>,
}

impl PointTable {
    /// Build a table, rejecting duplicate ids and non-finite coordinates.
    pub fn new(points: Vec<Point>) -> Result<Self, TableError> {
        let mut rows = IndexMap::with_capacity(points.len());
        for (row, p) in points.iter().enumerate() {
            for (axis, value) in [('x', p.x), ('y', p.y), ('z', p.z)] {
                if !value.is_finite() {
                    return Err(TableError::NonFiniteCoordinate {
                        id: p.id,
                        axis,
                        value,
                    });
                }
            }
            if let Some(&first_row) = rows.get(&p.id) {
                return Err(TableError::DuplicateId {
                    id: p.id,
                    first_row,
                    second_row: row,
                });
            }
            rows.insert(p.id, row);
        }
        Ok(Self { points, rows })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the table has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// All points as a slice, in row order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point at a row position.
    pub fn get(&self, row: usize) -> Option<&Point> {
        self.points.get(row)
    }

    /// Point with the given external id.
    pub fn by_id(&self, id: PointId) -> Option<&Point> {
        self.row_of(id).map(|row| &self.points[row])
    }

    /// Row position of an external id.
    pub fn row_of(&self, id: PointId) -> Option<usize> {
        self.rows.get(&id).copied()
    }

    /// External ids in row order.
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        self.points.iter().map(|p| p.id)
    }

    /// Distinct group labels in ascending order.
    pub fn groups(&self) -> Vec<GroupLabel> {
        let mut groups: Vec<GroupLabel> = self.points.iter().map(|p| p.group.clone()).collect();
        groups.sort();
        groups.dedup();
        groups
    }

    /// Largest x coordinate, or `None` for an empty table.
    pub fn max_x(&self) -> Option<f64> {
        self.max_by(|p| p.x)
    }

    /// Largest y coordinate, or `None` for an empty table.
    pub fn max_y(&self) -> Option<f64> {
        self.max_by(|p| p.y)
    }

    /// Largest z coordinate, or `None` for an empty table.
    pub fn max_z(&self) -> Option<f64> {
        self.max_by(|p| p.z)
    }

    fn max_by(&self, axis: impl Fn(&Point) -> f64) -> Option<f64> {
        self.points.iter().map(axis).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a PointTable {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> PointTable {
        PointTable::new(vec![
            Point::new(14, 1, [0.1, 0.1, 0.0]),
            Point::new(12, 1, [4.9, 0.2, 0.0]),
            Point::new(2, 2, [2.5, 2.5, 1.0]),
            Point::new(25, 2, [0.2, 4.8, 0.5]),
            Point::new(4, 3, [4.8, 7.9, 0.5]),
        ])
        .unwrap()
    }

    #[test]
    fn rows_follow_input_order() {
        let t = table();
        let ids: Vec<i64> = t.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![14, 12, 2, 25, 4]);
        assert_eq!(t.row_of(PointId(25)), Some(3));
        assert_eq!(t.row_of(PointId(99)), None);
        assert_eq!(t.by_id(PointId(4)).map(|p| p.y), Some(7.9));
    }

    #[test]
    fn tables_compare_by_rows() {
        assert_eq!(table(), table());
        let reordered = PointTable::new(table().points().iter().rev().cloned().collect()).unwrap();
        assert_ne!(table(), reordered);
    }

    #[test]
    fn groups_are_sorted_and_distinct() {
        let t = table();
        assert_eq!(
            t.groups(),
            vec![GroupLabel::Int(1), GroupLabel::Int(2), GroupLabel::Int(3)]
        );
    }

    #[test]
    fn extents() {
        let t = table();
        assert_eq!(t.max_x(), Some(4.9));
        assert_eq!(t.max_y(), Some(7.9));
        assert_eq!(t.max_z(), Some(1.0));
        assert_eq!(PointTable::default().max_x(), None);
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = PointTable::new(vec![
            Point::new(1, 1, [0.0, 0.0, 0.0]),
            Point::new(2, 1, [1.0, 0.0, 0.0]),
            Point::new(1, 2, [2.0, 0.0, 0.0]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateId {
                id: PointId(1),
                first_row: 0,
                second_row: 2,
            }
        );
        assert_eq!(err.to_string(), "duplicate point id 1 at rows 0 and 2");
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let err = PointTable::new(vec![Point::new(3, 1, [0.0, f64::NAN, 0.0])]).unwrap_err();
        assert!(matches!(
            err,
            TableError::NonFiniteCoordinate {
                id: PointId(3),
                axis: 'y',
                ..
            }
        ));
    }

    proptest! {
        #[test]
        fn row_of_inverts_ids(ids in proptest::collection::hash_set(-1000i64..1000, 0..40)) {
            let points: Vec<Point> = ids
                .iter()
                .map(|&id| Point::new(id, 0, [id as f64, 0.0, 0.0]))
                .collect();
            let t = PointTable::new(points).unwrap();
            for (row, id) in t.ids().enumerate() {
                prop_assert_eq!(t.row_of(id), Some(row));
            }
        }
    }
}
