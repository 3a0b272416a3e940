//! Boundary periodicity policy.

use crate::error::SpatialError;
use std::fmt;
use std::str::FromStr;

/// Whether the simulation domain wraps around.
///
/// Has no default. Every entry point takes the policy
/// explicitly, and text input must parse to one of [`Periodicity::NAMES`].
///
/// # Examples
///
/// ```
/// use nufeb_spatial::Periodicity;
///
/// assert_eq!("xy".parse::<Periodicity>().unwrap(), Periodicity::XY);
/// let err = "banana".parse::<Periodicity>().unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Unrecognized periodicity: banana. Must be one of none,xy"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Periodicity {
    /// Open boundaries on every axis.
    None,
    /// Toroidal wrap in x and y; z stays open.
    XY,
}

impl Periodicity {
    /// Accepted text forms, in declaration order.
    pub const NAMES: [&'static str; 2] = ["none", "xy"];

    /// Text form of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::XY => "xy",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "xy" => Ok(Self::XY),
            other => Err(SpatialError::UnrecognizedPeriodicity {
                value: other.to_string(),
            }),
        }
    }
}
