//! Strongly-typed identifiers: agent ids, group labels, and timesteps.

use std::fmt;

/// External identifier of a simulated agent.
///
/// Assigned by the simulator and carried through every analysis output.
/// Ids are unique within a [`PointTable`](crate::PointTable) but are not
/// required to be contiguous, sorted, or zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub i64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PointId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Simulation step at which a snapshot was dumped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestep(pub u64);

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Timestep {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Categorical label partitioning agents into taxa or types.
///
/// NUFEB dumps carry integer atom types; hand-built tables often use
/// taxon names. Both are supported. The ordering is total: every
/// `Int` sorts before every `Name`, integers numerically, names
/// lexicographically. Analysis tables use this order for their group
/// columns.
///
/// # Examples
///
/// ```
/// use nufeb_core::GroupLabel;
///
/// let a = GroupLabel::from(3);
/// let b = GroupLabel::from("heterotroph");
/// assert!(a < b);
/// assert_eq!(a.to_string(), "3");
/// assert_eq!(b.to_string(), "heterotroph");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupLabel {
    /// Integer type, as written by the simulator.
    Int(i64),
    /// Named taxon.
    Name(String),
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for GroupLabel {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for GroupLabel {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for GroupLabel {
    fn from(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

impl From<String> for GroupLabel {
    fn from(s: String) -> Self {
        Self::Name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_sort_before_names() {
        let mut labels = vec![
            GroupLabel::from("b"),
            GroupLabel::from(10),
            GroupLabel::from("a"),
            GroupLabel::from(-2),
        ];
        labels.sort();
        assert_eq!(
            labels,
            vec![
                GroupLabel::Int(-2),
                GroupLabel::Int(10),
                GroupLabel::Name("a".into()),
                GroupLabel::Name("b".into()),
            ]
        );
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(PointId(42).to_string(), "42");
        assert_eq!(Timestep(7).to_string(), "7");
        assert_eq!(GroupLabel::from(-1).to_string(), "-1");
    }
}
