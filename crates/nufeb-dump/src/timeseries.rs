//! Agents present at each dumped timestep.

use crate::error::DumpError;
use crate::types::AgentRecord;
use indexmap::IndexMap;
use nufeb_core::{GroupLabel, PointId, PointTable, Timestep};
use std::collections::BTreeMap;
use tracing::debug;

/// Agents alive at one timestep, in record order.
pub(crate) type Frame = IndexMap<PointId, GroupLabel>;

/// Agent membership over time.
///
/// Timesteps are kept in ascending order regardless of input order. Each
/// timestep maps agent ids to their group at that step, preserving the
/// order records arrived in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeseries {
    pub(crate) frames: BTreeMap<Timestep, Frame>,
}

impl Timeseries {
    /// Build from flat records.
    ///
    /// Only timesteps with at least one record exist in the result; use
    /// [`from_parts`](Self::from_parts) when some dumped steps are empty.
    ///
    /// # Errors
    ///
    /// [`DumpError::DuplicateRecord`] if an id repeats within a timestep.
    pub fn from_records<I>(records: I) -> Result<Self, DumpError>
    where
        I: IntoIterator<Item = AgentRecord>,
    {
        Self::from_parts([], records)
    }

    /// Build from the list of dumped timesteps plus flat records.
    ///
    /// Every step in `timesteps` exists in the result even if no record
    /// names it, so a step where every agent has died still counts.
    /// Records may also name steps missing from `timesteps`.
    ///
    /// # Errors
    ///
    /// [`DumpError::DuplicateRecord`] if an id repeats within a timestep.
    pub fn from_parts<T, I>(timesteps: T, records: I) -> Result<Self, DumpError>
    where
        T: IntoIterator<Item = Timestep>,
        I: IntoIterator<Item = AgentRecord>,
    {
        let mut frames: BTreeMap<Timestep, Frame> =
            timesteps.into_iter().map(|t| (t, Frame::new())).collect();
        let mut count = 0usize;
        for AgentRecord {
            timestep,
            id,
            group,
        } in records
        {
            let frame = frames.entry(timestep).or_default();
            if frame.insert(id, group).is_some() {
                return Err(DumpError::DuplicateRecord { timestep, id });
            }
            count += 1;
        }
        debug!(records = count, timesteps = frames.len(), "timeseries built");
        Ok(Self { frames })
    }

    /// Build from one point table per timestep.
    ///
    /// An empty table still contributes its timestep.
    ///
    /// # Errors
    ///
    /// [`DumpError::DuplicateRecord`] if the same timestep is given twice
    /// with overlapping ids.
    pub fn from_snapshots<'a, I>(snapshots: I) -> Result<Self, DumpError>
    where
        I: IntoIterator<Item = (Timestep, &'a PointTable)>,
    {
        let mut timesteps = Vec::new();
        let mut records = Vec::new();
        for (timestep, table) in snapshots {
            timesteps.push(timestep);
            records.extend(table.iter().map(|p| AgentRecord {
                timestep,
                id: p.id,
                group: p.group.clone(),
            }));
        }
        Self::from_parts(timesteps, records)
    }

    /// Dumped timesteps, ascending.
    pub fn timesteps(&self) -> Vec<Timestep> {
        self.frames.keys().copied().collect()
    }

    /// Largest timestep plus one, or 0 for an empty series.
    ///
    /// Dumps start at step 0, so this is the run length even when
    /// intermediate steps were not written.
    pub fn num_timesteps(&self) -> u64 {
        self.frames
            .keys()
            .next_back()
            .map_or(0, |last| last.0 + 1)
    }

    /// `true` when the series has no timesteps.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Ids present at `timestep`, in record order.
    pub fn ids_at(&self, timestep: Timestep) -> Result<Vec<PointId>, DumpError> {
        Ok(self.frame(timestep)?.keys().copied().collect())
    }

    /// Group of every agent present at `timestep`, in record order.
    pub fn groups_at(&self, timestep: Timestep) -> Result<Vec<GroupLabel>, DumpError> {
        Ok(self.frame(timestep)?.values().cloned().collect())
    }

    /// All records, ordered by timestep then record order.
    pub fn records(&self) -> impl Iterator<Item = AgentRecord> + '_ {
        self.frames.iter().flat_map(|(&timestep, frame)| {
            frame.iter().map(move |(&id, group)| AgentRecord {
                timestep,
                id,
                group: group.clone(),
            })
        })
    }

    pub(crate) fn frame(&self, timestep: Timestep) -> Result<&Frame, DumpError> {
        self.frames
            .get(&timestep)
            .ok_or(DumpError::MissingTimestep { timestep })
    }

    /// Fail unless every timestep follows its predecessor by exactly one.
    pub(crate) fn require_consecutive(&self) -> Result<(), DumpError> {
        let steps: Vec<Timestep> = self.frames.keys().copied().collect();
        for w in steps.windows(2) {
            if w[1].0 != w[0].0 + 1 {
                return Err(DumpError::NonConsecutiveTimesteps {
                    previous: w[0],
                    next: w[1],
                });
            }
        }
        Ok(())
    }
}
