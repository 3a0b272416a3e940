//! Spatial neighbor analysis for NUFEB agent snapshots.
//!
//! Every operation takes an immutable [`PointTable`](nufeb_core::PointTable),
//! a [`Periodicity`] policy, and a [`DomainSize`]. The domain is validated
//! before any geometry is built; results are keyed by external point ids,
//! never by row position.
//!
//! # Operations
//!
//! - [`neighbors_radius`]: every other point within a radius, nearest first
//! - [`nearest_neighbors`]: the `k` closest other points, nearest first
//! - [`local_population_structure`]: neighbor counts per group
//! - [`distance_to_each_group`]: nearest member of every group
//!
//! # Periodicity
//!
//! With [`Periodicity::XY`] the domain wraps toroidally in x and y. Radius
//! queries replicate the point cloud into a 3×3 tiling of the x/y plane;
//! dense pairwise distances use the per-axis minimum image. z never wraps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod metric;
pub mod nearest;
pub mod neighbors;
pub mod periodicity;
pub mod population;

mod index;

#[cfg(test)]
pub(crate) mod compliance;

pub use domain::{validate_domain, Boundary, DomainCheck, DomainSize, DomainWarning};
pub use error::{Axes, AxisValues, Extent, SpatialError};
pub use nearest::{distance_to_each_group, Nearest, NearestTable};
pub use neighbors::{nearest_neighbors, neighbors_radius, NeighborMap};
pub use periodicity::Periodicity;
pub use population::{local_population_structure, PopulationStructure};
