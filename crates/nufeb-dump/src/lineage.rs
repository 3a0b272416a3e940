//! Births and deaths between consecutive timesteps.
//!
//! An agent is born at `t` if it is present at `t` and absent at `t - 1`.
//! It dies at `t` if it is present at `t - 1` and absent at `t`. The first
//! timestep of a series has no births; deaths are reported at the step the
//! agent disappears, with the group it had when last seen.

use crate::error::DumpError;
use crate::timeseries::{Frame, Timeseries};
use crate::types::{AgentRecord, GroupSelection};
use crate::ALL_GROUPS;
use indexmap::IndexMap;
use nufeb_core::{PointId, Timestep};

/// Birth or death records keyed by selection name.
pub type Events = IndexMap<String, Vec<AgentRecord>>;

impl Timeseries {
    /// Ids present at `timestep` but not at `timestep - 1`, ascending.
    ///
    /// # Errors
    ///
    /// [`DumpError::MissingTimestep`] if either step was not dumped. At
    /// timestep 0 there is no predecessor and the error names step 0.
    pub fn births_at(&self, timestep: Timestep) -> Result<Vec<PointId>, DumpError> {
        let (previous, current) = self.pair(timestep)?;
        Ok(difference(current, previous))
    }

    /// Ids present at `timestep - 1` but not at `timestep`, ascending.
    ///
    /// # Errors
    ///
    /// As for [`births_at`](Self::births_at).
    pub fn deaths_at(&self, timestep: Timestep) -> Result<Vec<PointId>, DumpError> {
        let (previous, current) = self.pair(timestep)?;
        Ok(difference(previous, current))
    }

    /// Every birth in the series, split by `selection`.
    ///
    /// With no selection the result has the single key
    /// [`ALL_GROUPS`](crate::ALL_GROUPS). Records are ordered by timestep,
    /// then by their order within the dump.
    ///
    /// # Errors
    ///
    /// [`DumpError::NonConsecutiveTimesteps`] if the series has a gap.
    ///
    /// # Examples
    ///
    /// ```
    /// use nufeb_dump::{AgentRecord, GroupSelection, Timeseries};
    ///
    /// let ts = Timeseries::from_records([
    ///     AgentRecord::new(0, 1, 1),
    ///     AgentRecord::new(1, 1, 1),
    ///     AgentRecord::new(1, 2, 2),
    ///     AgentRecord::new(1, 3, 1),
    /// ])
    /// .unwrap();
    ///
    /// let all = ts.births(None).unwrap();
    /// assert_eq!(all["all"].len(), 2);
    ///
    /// let sel = GroupSelection::new().with("taxa2", [2]);
    /// let split = ts.births(Some(&sel)).unwrap();
    /// assert_eq!(split["taxa2"], vec![AgentRecord::new(1, 2, 2)]);
    /// ```
    pub fn births(&self, selection: Option<&GroupSelection>) -> Result<Events, DumpError> {
        self.require_consecutive()?;
        let mut out = Vec::new();
        for ((_, previous), (&t, current)) in self.frames.iter().zip(self.frames.iter().skip(1)) {
            out.extend(appeared(t, current, previous));
        }
        Ok(split(out, selection))
    }

    /// Every death in the series, split by `selection`.
    ///
    /// Each record carries the timestep at which the agent was first
    /// missing and the group it last had.
    ///
    /// # Errors
    ///
    /// [`DumpError::NonConsecutiveTimesteps`] if the series has a gap.
    pub fn deaths(&self, selection: Option<&GroupSelection>) -> Result<Events, DumpError> {
        self.require_consecutive()?;
        let mut out = Vec::new();
        for ((_, previous), (&t, current)) in self.frames.iter().zip(self.frames.iter().skip(1)) {
            out.extend(appeared(t, previous, current));
        }
        Ok(split(out, selection))
    }

    fn pair(&self, timestep: Timestep) -> Result<(&Frame, &Frame), DumpError> {
        let current = self.frame(timestep)?;
        let previous = match timestep.0.checked_sub(1) {
            Some(p) => self.frame(Timestep(p))?,
            None => return Err(DumpError::MissingTimestep { timestep }),
        };
        Ok((previous, current))
    }
}

fn difference(a: &Frame, b: &Frame) -> Vec<PointId> {
    let mut ids: Vec<PointId> = a.keys().filter(|id| !b.contains_key(*id)).copied().collect();
    ids.sort_unstable();
    ids
}

/// Records of `present` whose id is missing from `absent`, stamped `t`.
fn appeared<'a>(
    t: Timestep,
    present: &'a Frame,
    absent: &'a Frame,
) -> impl Iterator<Item = AgentRecord> + 'a {
    present
        .iter()
        .filter(move |(id, _)| !absent.contains_key(*id))
        .map(move |(&id, group)| AgentRecord {
            timestep: t,
            id,
            group: group.clone(),
        })
}

fn split(records: Vec<AgentRecord>, selection: Option<&GroupSelection>) -> Events {
    let Some(selection) = selection else {
        return IndexMap::from([(ALL_GROUPS.to_owned(), records)]);
    };
    selection
        .iter()
        .map(|(name, groups)| {
            let picked = records
                .iter()
                .filter(|r| groups.contains(&r.group))
                .cloned()
                .collect();
            (name.to_owned(), picked)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(t: u64, id: i64, g: i64) -> AgentRecord {
        AgentRecord::new(t, id, g)
    }

    /// 0: {1,2,3}  1: {1,3,4,5}  2: {4,5,6}
    fn series() -> Timeseries {
        Timeseries::from_records([
            rec(0, 1, 1),
            rec(0, 2, 2),
            rec(0, 3, 3),
            rec(1, 1, 1),
            rec(1, 3, 3),
            rec(1, 5, 2),
            rec(1, 4, 1),
            rec(2, 4, 1),
            rec(2, 5, 2),
            rec(2, 6, 3),
        ])
        .unwrap()
    }

    fn ids(v: &[i64]) -> Vec<PointId> {
        v.iter().copied().map(PointId).collect()
    }

    #[test]
    fn births_and_deaths_at_a_step() {
        let ts = series();
        assert_eq!(ts.births_at(Timestep(1)).unwrap(), ids(&[4, 5]));
        assert_eq!(ts.deaths_at(Timestep(1)).unwrap(), ids(&[2]));
        assert_eq!(ts.births_at(Timestep(2)).unwrap(), ids(&[6]));
        assert_eq!(ts.deaths_at(Timestep(2)).unwrap(), ids(&[1, 3]));
    }

    #[test]
    fn step_without_predecessor_is_an_error() {
        let ts = series();
        assert_eq!(
            ts.births_at(Timestep(0)).unwrap_err(),
            DumpError::MissingTimestep { timestep: Timestep(0) }
        );
        assert_eq!(
            ts.deaths_at(Timestep(3)).unwrap_err(),
            DumpError::MissingTimestep { timestep: Timestep(3) }
        );
    }

    #[test]
    fn births_over_series() {
        let all = series().births(None).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(
            all[ALL_GROUPS],
            vec![rec(1, 5, 2), rec(1, 4, 1), rec(2, 6, 3)]
        );
    }

    #[test]
    fn deaths_carry_last_seen_group() {
        let all = series().deaths(None).unwrap();
        assert_eq!(
            all[ALL_GROUPS],
            vec![rec(1, 2, 2), rec(2, 1, 1), rec(2, 3, 3)]
        );
    }

    #[test]
    fn selection_splits_by_name() {
        let sel = GroupSelection::new()
            .with("taxa1", [1])
            .with("taxa23", [2, 3]);
        let births = series().births(Some(&sel)).unwrap();
        assert_eq!(births.keys().collect::<Vec<_>>(), vec!["taxa1", "taxa23"]);
        assert_eq!(births["taxa1"], vec![rec(1, 4, 1)]);
        assert_eq!(births["taxa23"], vec![rec(1, 5, 2), rec(2, 6, 3)]);

        let deaths = series().deaths(Some(&GroupSelection::new().with("none", [9]))).unwrap();
        assert!(deaths["none"].is_empty());
    }

    #[test]
    fn gaps_reject_series_queries() {
        let ts = Timeseries::from_records([rec(0, 1, 1), rec(2, 1, 1)]).unwrap();
        assert!(matches!(
            ts.births(None),
            Err(DumpError::NonConsecutiveTimesteps { .. })
        ));
        assert!(matches!(
            ts.deaths(None),
            Err(DumpError::NonConsecutiveTimesteps { .. })
        ));
    }

    #[test]
    fn extinction_then_regrowth() {
        let ts = Timeseries::from_parts(
            [Timestep(0), Timestep(1), Timestep(2)],
            [rec(0, 1, 1), rec(0, 2, 2), rec(2, 3, 1)],
        )
        .unwrap();
        assert_eq!(ts.deaths_at(Timestep(1)).unwrap(), ids(&[1, 2]));
        assert!(ts.births_at(Timestep(1)).unwrap().is_empty());
        assert_eq!(ts.births_at(Timestep(2)).unwrap(), ids(&[3]));
        assert_eq!(
            ts.deaths(None).unwrap()[ALL_GROUPS],
            vec![rec(1, 1, 1), rec(1, 2, 2)]
        );
        assert_eq!(ts.births(None).unwrap()[ALL_GROUPS], vec![rec(2, 3, 1)]);
        assert_eq!(ts.turnover().unwrap().len(), 3);
    }

    #[test]
    fn extinction_at_last_step_keeps_deaths() {
        let ts = Timeseries::from_parts(
            [Timestep(0), Timestep(1)],
            [rec(0, 1, 1), rec(0, 2, 1)],
        )
        .unwrap();
        assert_eq!(ts.timesteps(), vec![Timestep(0), Timestep(1)]);
        assert_eq!(ts.deaths(None).unwrap()[ALL_GROUPS].len(), 2);
    }

    #[test]
    fn single_timestep_has_no_events() {
        let ts = Timeseries::from_records([rec(3, 1, 1)]).unwrap();
        assert!(ts.births(None).unwrap()[ALL_GROUPS].is_empty());
        assert!(ts.deaths(None).unwrap()[ALL_GROUPS].is_empty());
    }
}
