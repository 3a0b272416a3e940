//! Record and selection types.

use indexmap::IndexMap;
use nufeb_core::{GroupLabel, PointId, Timestep};

/// One agent present at one timestep.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentRecord {
    /// Dump step.
    pub timestep: Timestep,
    /// Agent id.
    pub id: PointId,
    /// Agent group (atom type) at that step.
    pub group: GroupLabel,
}

impl AgentRecord {
    /// Build a record from raw values.
    pub fn new(timestep: u64, id: i64, group: impl Into<GroupLabel>) -> Self {
        Self {
            timestep: Timestep(timestep),
            id: PointId(id),
            group: group.into(),
        }
    }
}

/// Named sets of groups for splitting birth and death reports.
///
/// Names keep insertion order. A group may belong to several names.
///
/// ```
/// use nufeb_dump::GroupSelection;
///
/// let sel = GroupSelection::new()
///     .with("taxa1", [1])
///     .with("taxa23", [2, 3]);
/// assert_eq!(sel.names().collect::<Vec<_>>(), vec!["taxa1", "taxa23"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSelection {
    sets: IndexMap<String, Vec<GroupLabel>>,
}

impl GroupSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the set called `name`.
    pub fn with<I, G>(mut self, name: impl Into<String>, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GroupLabel>,
    {
        self.sets
            .insert(name.into(), groups.into_iter().map(Into::into).collect());
        self
    }

    /// Set names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// `(name, groups)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GroupLabel])> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of named sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// `true` when no set has been added.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
