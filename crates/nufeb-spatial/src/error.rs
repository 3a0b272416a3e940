//! Error types for spatial queries and domain validation.

use std::fmt;

/// Which of the periodic axes a domain error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axes {
    /// Only `xlen`.
    X,
    /// Only `ylen`.
    Y,
    /// Both `xlen` and `ylen`.
    Both,
}

/// Per-axis payload of a domain error, present only for the failing axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisValues<T> {
    /// `xlen` failed.
    X(T),
    /// `ylen` failed.
    Y(T),
    /// Both failed: `(x, y)`.
    Both(T, T),
}

impl<T> AxisValues<T> {
    /// Combine optional per-axis failures. `None` when neither axis failed.
    pub fn from_options(x: Option<T>, y: Option<T>) -> Option<Self> {
        match (x, y) {
            (Some(x), Some(y)) => Some(Self::Both(x, y)),
            (Some(x), None) => Some(Self::X(x)),
            (None, Some(y)) => Some(Self::Y(y)),
            (None, None) => None,
        }
    }

    /// The axes that failed.
    pub fn axes(&self) -> Axes {
        match self {
            Self::X(_) => Axes::X,
            Self::Y(_) => Axes::Y,
            Self::Both(..) => Axes::Both,
        }
    }
}

/// A configured domain length and the largest coordinate that exceeds it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    /// Configured length.
    pub configured: f64,
    /// Largest coordinate observed in the point table.
    pub observed_max: f64,
}

/// Errors raised before any spatial index is built.
///
/// All variants are deterministic input-validation failures.
#[derive(Clone, Debug, PartialEq)]
pub enum SpatialError {
    /// Periodicity text is not one of the supported policies.
    UnrecognizedPeriodicity {
        /// The rejected value.
        value: String,
    },
    /// XY periodicity requested without `xlen` and/or `ylen`.
    MissingDomainSize {
        /// Which lengths are missing.
        axes: Axes,
    },
    /// XY periodicity requested with a length that is not a finite value > 0.
    NonPositiveDomainSize {
        /// The offending lengths.
        values: AxisValues<f64>,
    },
    /// A domain length is smaller than the largest coordinate on that axis.
    DomainSmallerThanData {
        /// Configured lengths and observed maxima for the failing axes.
        extents: AxisValues<Extent>,
    },
    /// Search radius is negative or not finite.
    InvalidRadius {
        /// The offending radius.
        radius: f64,
    },
}

impl fmt::Display for SpatialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedPeriodicity { value } => write!(
                f,
                "Unrecognized periodicity: {value}. Must be one of {}",
                crate::Periodicity::NAMES.join(",")
            ),
            Self::MissingDomainSize { axes } => {
                let missing = match axes {
                    Axes::X => "xlen is",
                    Axes::Y => "ylen is",
                    Axes::Both => "xlen and ylen are",
                };
                write!(f, "Periodicity of \"xy\" specified but {missing} not set")
            }
            Self::NonPositiveDomainSize { values } => match values {
                AxisValues::X(x) => write!(
                    f,
                    "Periodicity of \"xy\" specified but xlen is not > 0. xlen: {x}"
                ),
                AxisValues::Y(y) => write!(
                    f,
                    "Periodicity of \"xy\" specified but ylen is not > 0. ylen: {y}"
                ),
                AxisValues::Both(x, y) => write!(
                    f,
                    "Periodicity of \"xy\" specified but xlen and ylen not > 0. \
                     xlen: {x}, ylen: {y}"
                ),
            },
            Self::DomainSmallerThanData { extents } => match extents {
                AxisValues::X(x) => write!(
                    f,
                    "xlen is specified to {}, lower than max x-value of points in dataset: {}",
                    x.configured, x.observed_max
                ),
                AxisValues::Y(y) => write!(
                    f,
                    "ylen is specified to {}, lower than max y-value of points in dataset: {}",
                    y.configured, y.observed_max
                ),
                AxisValues::Both(x, y) => write!(
                    f,
                    "xlen, ylen are {}, {}, lower than max values in dataset:{} {}",
                    x.configured, y.configured, x.observed_max, y.observed_max
                ),
            },
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be finite and >= 0, got {radius}")
            }
        }
    }
}

impl std::error::Error for SpatialError {}
