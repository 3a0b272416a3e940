//! Core types for NUFEB simulation analysis.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the point-in-time view of a simulated microbial community that every
//! analysis crate consumes: agent identifiers, group labels, and the
//! immutable [`PointTable`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod point;

pub use error::TableError;
pub use id::{GroupLabel, PointId, Timestep};
pub use point::{Point, PointTable};
