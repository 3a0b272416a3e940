//! Distance from every point to the closest member of each group.

use crate::domain::{validate_domain, DomainSize};
use crate::error::SpatialError;
use crate::metric::DistanceMatrix;
use crate::periodicity::Periodicity;
use indexmap::IndexMap;
use nufeb_core::{GroupLabel, PointId, PointTable};
use tracing::debug;

/// Closest member of one group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// Euclidean distance (minimum image when periodic).
    pub distance: f64,
    /// Id of the closest member.
    pub id: PointId,
}

/// Per-point nearest member of every group.
///
/// Rows follow the source table's row order; groups are ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct NearestTable {
    groups: Vec<GroupLabel>,
    rows: IndexMap<PointId, Vec<Nearest>>,
}

impl NearestTable {
    /// Group labels, ascending.
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

    /// Closest member of `group` to `id`.
    pub fn get(&self, id: PointId, group: &GroupLabel) -> Option<Nearest> {
        let col = self.groups.binary_search(group).ok()?;
        self.rows.get(&id).map(|row| row[col])
    }

    /// Nearest entries for `id`, aligned with [`groups`](Self::groups).
    pub fn row(&self, id: PointId) -> Option<&[Nearest]> {
        self.rows.get(&id).map(Vec::as_slice)
    }

    /// `(id, entries)` in row order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &[Nearest])> {
        self.rows.iter().map(|(&id, r)| (id, r.as_slice()))
    }

    /// Flat column names for reporting: `distance_<g>`, `id_<g>` per group.
    pub fn column_names(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| [format!("distance_{g}"), format!("id_{g}")])
            .collect()
    }
}

/// For every point, the distance to and id of the closest point of each
/// group.
///
/// A point is never its own nearest member unless it is the only member of
/// its group; then it reports itself at distance 0. Equal distances
/// resolve to the member with the lowest row position.
///
/// Builds a dense `n × n` matrix of squared distances.
///
/// # Errors
///
/// Domain validation errors from [`validate_domain`].
///
/// # Examples
///
/// ```
/// use nufeb_core::{GroupLabel, Point, PointId, PointTable};
/// use nufeb_spatial::{distance_to_each_group, DomainSize, Periodicity};
///
/// let points = PointTable::new(vec![
///     Point::new(1, 1, [0.0, 0.0, 0.0]),
///     Point::new(2, 2, [3.0, 4.0, 0.0]),
///     Point::new(3, 1, [1.0, 0.0, 0.0]),
/// ])
/// .unwrap();
/// let t = distance_to_each_group(&points, Periodicity::None, &DomainSize::new()).unwrap();
///
/// let own = t.get(PointId(1), &GroupLabel::Int(1)).unwrap();
/// assert_eq!((own.id, own.distance), (PointId(3), 1.0));
///
/// // Group 2 has one member; it is its own nearest at distance 0.
/// let single = t.get(PointId(2), &GroupLabel::Int(2)).unwrap();
/// assert_eq!((single.id, single.distance), (PointId(2), 0.0));
/// ```
pub fn distance_to_each_group(
    points: &PointTable,
    periodicity: Periodicity,
    domain: &DomainSize,
) -> Result<NearestTable, SpatialError> {
    let check = validate_domain(points, periodicity, domain)?;
    let matrix = DistanceMatrix::squared(points, &check.boundary);
    debug!(points = points.len(), %periodicity, "dense group distance matrix");

    let groups = points.groups();
    let mut members: IndexMap<&GroupLabel, Vec<usize>> =
        groups.iter().map(|g| (g, Vec::new())).collect();
    for (row, p) in points.iter().enumerate() {
        if let Some(m) = members.get_mut(&p.group) {
            m.push(row);
        }
    }

    let all = points.points();
    let rows = (0..points.len())
        .map(|row| {
            let d2 = matrix.row(row);
            let entries = members
                .values()
                .filter_map(|candidates| {
                    let singleton = candidates.len() == 1;
                    candidates
                        .iter()
                        .map(|&c| {
                            let d = if c == row && !singleton {
                                f64::INFINITY
                            } else {
                                d2[c]
                            };
                            (d, c)
                        })
                        .reduce(|best, next| if next.0 < best.0 { next } else { best })
                })
                .map(|(d, c)| Nearest {
                    distance: d.sqrt(),
                    id: all[c].id,
                })
                .collect();
            (all[row].id, entries)
        })
        .collect();

    Ok(NearestTable { groups, rows })
}
