//! NUFEB analysis: spatial neighborhoods and population dynamics of
//! simulated microbial agents.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the NUFEB sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use nufeb::prelude::*;
//!
//! let points = PointTable::new(vec![
//!     Point::new(1, 1, [0.5, 0.5, 0.0]),
//!     Point::new(2, 2, [5.5, 0.5, 0.0]),
//!     Point::new(3, 1, [3.0, 2.5, 0.0]),
//! ])
//! .unwrap();
//! let domain = DomainSize::new().xlen(6.0).ylen(5.0);
//!
//! // 1 and 2 are 1.0 apart across the x boundary.
//! let map = neighbors_radius(&points, 1.5, Periodicity::XY, &domain).unwrap();
//! assert_eq!(map.get(PointId(1)).unwrap(), &[PointId(2)]);
//!
//! let open = neighbors_radius(&points, 1.5, Periodicity::None, &DomainSize::new()).unwrap();
//! assert!(open.get(PointId(1)).unwrap().is_empty());
//!
//! let nearest = distance_to_each_group(&points, Periodicity::XY, &domain).unwrap();
//! assert_eq!(nearest.get(PointId(1), &GroupLabel::Int(2)).unwrap().id, PointId(2));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nufeb-core` | Ids, group labels, points and point tables |
//! | [`spatial`] | `nufeb-spatial` | Domain validation, neighbor queries, group tallies |
//! | [`dump`] | `nufeb-dump` | Time series, births, deaths and turnover |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Ids, group labels and point tables (`nufeb-core`).
pub use nufeb_core as types;

/// Domain validation and spatial queries (`nufeb-spatial`).
///
/// [`spatial::neighbors_radius`], [`spatial::nearest_neighbors`],
/// [`spatial::local_population_structure`] and
/// [`spatial::distance_to_each_group`] all take a
/// [`spatial::Periodicity`] and a [`spatial::DomainSize`].
pub use nufeb_spatial as spatial;

/// Population time series (`nufeb-dump`).
///
/// Build a [`dump::Timeseries`] from records or snapshots, then query
/// births, deaths and turnover.
pub use nufeb_dump as dump;

/// Common imports for typical NUFEB analysis.
///
/// ```rust
/// use nufeb::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use nufeb_core::{GroupLabel, Point, PointId, PointTable, TableError, Timestep};

    // Spatial
    pub use nufeb_spatial::{
        distance_to_each_group, local_population_structure, nearest_neighbors, neighbors_radius,
        DomainSize, NearestTable, NeighborMap, Periodicity, PopulationStructure, SpatialError,
    };

    // Time series
    pub use nufeb_dump::{AgentRecord, DumpError, GroupSelection, Timeseries};
}
