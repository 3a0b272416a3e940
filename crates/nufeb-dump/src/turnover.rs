//! Per-group birth and death totals.

use crate::error::DumpError;
use crate::timeseries::Timeseries;
use nufeb_core::{GroupLabel, Timestep};
use std::collections::BTreeMap;

/// Births and deaths of one group at one timestep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turnover {
    /// Step the events are reported at.
    pub timestep: Timestep,
    /// Group of the agents involved.
    pub group: GroupLabel,
    /// Agents of `group` that appeared.
    pub births: u32,
    /// Agents of `group` that disappeared.
    pub deaths: u32,
}

impl Turnover {
    /// Deaths per birth, or `None` when nothing was born.
    pub fn curtis_number(&self) -> Option<f64> {
        (self.births > 0).then(|| f64::from(self.deaths) / f64::from(self.births))
    }
}

impl Timeseries {
    /// Birth and death counts per timestep and group.
    ///
    /// Only `(timestep, group)` pairs with at least one event appear,
    /// ordered by timestep then group.
    ///
    /// # Errors
    ///
    /// [`DumpError::NonConsecutiveTimesteps`] if the series has a gap.
    pub fn turnover(&self) -> Result<Vec<Turnover>, DumpError> {
        let mut tally: BTreeMap<(Timestep, GroupLabel), (u32, u32)> = BTreeMap::new();
        for events in self.births(None)?.into_values() {
            for r in events {
                tally.entry((r.timestep, r.group)).or_default().0 += 1;
            }
        }
        for events in self.deaths(None)?.into_values() {
            for r in events {
                tally.entry((r.timestep, r.group)).or_default().1 += 1;
            }
        }
        Ok(tally
            .into_iter()
            .map(|((timestep, group), (births, deaths))| Turnover {
                timestep,
                group,
                births,
                deaths,
            })
            .collect())
    }
}
