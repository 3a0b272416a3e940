//! Domain sizes and their validation against a periodicity policy.
//!
//! [`validate_domain`] is the first step of every spatial operation. It
//! turns a [`Periodicity`] plus optional [`DomainSize`] into a resolved
//! [`Boundary`], failing fast on inconsistent input and collecting
//! advisory [`DomainWarning`]s for over-specified input.

use crate::error::{Axes, AxisValues, Extent, SpatialError};
use crate::periodicity::Periodicity;
use nufeb_core::PointTable;
use smallvec::SmallVec;
use std::fmt;
use tracing::warn;

/// Extents of the simulation box.
///
/// Only required under [`Periodicity::XY`], where `xlen` and `ylen` give
/// the wrap lengths. `zlen` is accepted for symmetry with the simulator's
/// box description but z never wraps.
///
/// # Examples
///
/// ```
/// use nufeb_spatial::DomainSize;
///
/// let d = DomainSize::new().xlen(5.0).ylen(9.0);
/// assert_eq!(d.xlen, Some(5.0));
/// assert_eq!(d.zlen, None);
/// assert_eq!(d, DomainSize::xy(5.0, 9.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DomainSize {
    /// Length along x.
    pub xlen: Option<f64>,
    /// Length along y.
    pub ylen: Option<f64>,
    /// Length along z (never used for wrapping).
    pub zlen: Option<f64>,
}

impl DomainSize {
    /// No lengths set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Both periodic lengths set.
    pub fn xy(xlen: f64, ylen: f64) -> Self {
        Self::new().xlen(xlen).ylen(ylen)
    }

    /// Set the x length.
    pub fn xlen(mut self, xlen: f64) -> Self {
        self.xlen = Some(xlen);
        self
    }

    /// Set the y length.
    pub fn ylen(mut self, ylen: f64) -> Self {
        self.ylen = Some(ylen);
        self
    }

    /// Set the z length.
    pub fn zlen(mut self, zlen: f64) -> Self {
        self.zlen = Some(zlen);
        self
    }

    fn any_set(&self) -> bool {
        self.xlen.is_some() || self.ylen.is_some() || self.zlen.is_some()
    }
}

/// Resolved boundary geometry after validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary {
    /// No wrapping.
    Open,
    /// Toroidal in x and y with the given lengths.
    PeriodicXY {
        /// Wrap length along x.
        xlen: f64,
        /// Wrap length along y.
        ylen: f64,
    },
}

impl Boundary {
    /// x/y offsets of the 3×3 tiling used for periodic radius queries.
    ///
    /// The untranslated tile comes first. An open boundary has only that
    /// tile.
    pub fn tile_offsets(&self) -> SmallVec<[[f64; 2]; 9]> {
        match *self {
            Self::Open => smallvec::smallvec![[0.0, 0.0]],
            Self::PeriodicXY { xlen, ylen } => smallvec::smallvec![
                [0.0, 0.0],
                [xlen, 0.0],
                [-xlen, 0.0],
                [0.0, ylen],
                [0.0, -ylen],
                [xlen, ylen],
                [xlen, -ylen],
                [-xlen, ylen],
                [-xlen, -ylen],
            ],
        }
    }
}

/// Non-fatal observations about the supplied domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainWarning {
    /// Lengths were supplied although the policy has no periodicity.
    UnusedDimensions,
    /// `zlen` was supplied with XY periodicity; z never wraps.
    ZlenIgnored,
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnusedDimensions => write!(
                f,
                "Either xlen, ylen, or zlen is set but is not needed for no periodicity. \
                 Are you sure you're asking for what you're expecting?"
            ),
            Self::ZlenIgnored => write!(
                f,
                "zlen is set but z is never periodic; it is ignored for \"xy\" periodicity"
            ),
        }
    }
}

/// Outcome of a successful [`validate_domain`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct DomainCheck {
    /// Geometry to compute distances with.
    pub boundary: Boundary,
    /// Advisory warnings, already emitted through `tracing`.
    pub warnings: SmallVec<[DomainWarning; 2]>,
}

/// Validate `domain` against `periodicity` and the extent of `points`.
///
/// Under [`Periodicity::None`] any supplied length is reported as
/// [`DomainWarning::UnusedDimensions`]. Under [`Periodicity::XY`] the
/// checks run in order: both lengths present, both finite and `> 0`, both
/// at least the largest coordinate on their axis. A length equal to the
/// maximum coordinate is accepted.
///
/// # Examples
///
/// ```
/// use nufeb_core::{Point, PointTable};
/// use nufeb_spatial::{validate_domain, Boundary, DomainSize, Periodicity};
///
/// let points = PointTable::new(vec![Point::new(1, 1, [4.9, 7.9, 0.0])]).unwrap();
/// let check = validate_domain(&points, Periodicity::XY, &DomainSize::xy(5.0, 9.0)).unwrap();
/// assert_eq!(check.boundary, Boundary::PeriodicXY { xlen: 5.0, ylen: 9.0 });
///
/// let err = validate_domain(&points, Periodicity::XY, &DomainSize::new()).unwrap_err();
/// assert!(err
///     .to_string()
///     .contains("Periodicity of \"xy\" specified but xlen and ylen are not set"));
/// ```
pub fn validate_domain(
    points: &PointTable,
    periodicity: Periodicity,
    domain: &DomainSize,
) -> Result<DomainCheck, SpatialError> {
    let mut warnings = SmallVec::new();
    let boundary = match periodicity {
        Periodicity::None => {
            if domain.any_set() {
                warnings.push(DomainWarning::UnusedDimensions);
            }
            Boundary::Open
        }
        Periodicity::XY => {
            let (xlen, ylen) = match (domain.xlen, domain.ylen) {
                (Some(x), Some(y)) => (x, y),
                (None, None) => return Err(SpatialError::MissingDomainSize { axes: Axes::Both }),
                (None, Some(_)) => return Err(SpatialError::MissingDomainSize { axes: Axes::X }),
                (Some(_), None) => return Err(SpatialError::MissingDomainSize { axes: Axes::Y }),
            };

            let bad = |v: f64| !(v.is_finite() && v > 0.0);
            let non_positive = AxisValues::from_options(
                bad(xlen).then_some(xlen),
                bad(ylen).then_some(ylen),
            );
            if let Some(values) = non_positive {
                return Err(SpatialError::NonPositiveDomainSize { values });
            }

            let too_small = |len: f64, max: Option<f64>| {
                max.filter(|&m| len < m).map(|m| Extent {
                    configured: len,
                    observed_max: m,
                })
            };
            let smaller = AxisValues::from_options(
                too_small(xlen, points.max_x()),
                too_small(ylen, points.max_y()),
            );
            if let Some(extents) = smaller {
                return Err(SpatialError::DomainSmallerThanData { extents });
            }

            if domain.zlen.is_some() {
                warnings.push(DomainWarning::ZlenIgnored);
            }
            Boundary::PeriodicXY { xlen, ylen }
        }
    };

    for w in &warnings {
        warn!(periodicity = %periodicity, "{w}");
    }
    Ok(DomainCheck { boundary, warnings })
}
