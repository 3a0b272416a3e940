//! Population counts per group.

use crate::error::DumpError;
use crate::timeseries::Timeseries;
use indexmap::IndexMap;
use nufeb_core::{GroupLabel, Timestep};

/// Agents per group at every timestep.
///
/// Columns are every group seen anywhere in the series, ascending; a
/// group absent at some timestep counts zero there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulationTable {
    groups: Vec<GroupLabel>,
    rows: IndexMap<Timestep, Vec<u32>>,
}

impl PopulationTable {
    /// Column labels, ascending.
    pub fn groups(&self) -> &[GroupLabel] {
        &self.groups
    }

    /// Counts at `timestep`, aligned with [`groups`](Self::groups).
    pub fn row(&self, timestep: Timestep) -> Option<&[u32]> {
        self.rows.get(&timestep).map(Vec::as_slice)
    }

    /// Agents of `group` at `timestep`.
    pub fn count(&self, timestep: Timestep, group: &GroupLabel) -> Option<u32> {
        let col = self.groups.binary_search(group).ok()?;
        self.rows.get(&timestep).map(|r| r[col])
    }

    /// Total agents at `timestep`.
    pub fn total(&self, timestep: Timestep) -> Option<u32> {
        self.rows.get(&timestep).map(|r| r.iter().sum())
    }

    /// `(timestep, counts)` ascending by timestep.
    pub fn iter(&self) -> impl Iterator<Item = (Timestep, &[u32])> {
        self.rows.iter().map(|(&t, r)| (t, r.as_slice()))
    }

    /// Number of timesteps.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// `true` for an empty series.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Timeseries {
    /// Agents per group present at `timestep`, groups ascending. Only
    /// groups with at least one agent appear.
    ///
    /// # Errors
    ///
    /// [`DumpError::MissingTimestep`] if `timestep` was not dumped.
    pub fn population_at(&self, timestep: Timestep) -> Result<IndexMap<GroupLabel, u32>, DumpError> {
        let mut counts: IndexMap<GroupLabel, u32> = IndexMap::new();
        for group in self.frame(timestep)?.values() {
            *counts.entry(group.clone()).or_insert(0) += 1;
        }
        counts.sort_keys();
        Ok(counts)
    }

    /// Population of every group at every timestep.
    pub fn population_abs(&self) -> PopulationTable {
        let mut groups: Vec<GroupLabel> = self
            .frames
            .values()
            .flat_map(|f| f.values().cloned())
            .collect();
        groups.sort();
        groups.dedup();

        let rows = self
            .frames
            .iter()
            .map(|(&t, frame)| {
                let mut row = vec![0u32; groups.len()];
                for g in frame.values() {
                    if let Ok(col) = groups.binary_search(g) {
                        row[col] += 1;
                    }
                }
                (t, row)
            })
            .collect();
        PopulationTable { groups, rows }
    }
}
