//! Time-series analysis over NUFEB agent dumps.
//!
//! A [`Timeseries`] holds which agents (id and group) exist at each dumped
//! timestep. From it this crate derives population counts, per-timestep
//! births and deaths, and per-group turnover.
//!
//! # Architecture
//!
//! - [`Timeseries`] is built from flat [`AgentRecord`]s or from per-step
//!   [`PointTable`](nufeb_core::PointTable) snapshots
//! - [`population`] counts agents per group
//! - [`lineage`] diffs consecutive timesteps into births and deaths
//! - [`turnover`] aggregates births and deaths per group
//!
//! Reading dump files is out of scope; callers decode their own format and
//! feed records in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lineage;
pub mod population;
pub mod timeseries;
pub mod turnover;
pub mod types;

pub use error::DumpError;
pub use lineage::Events;
pub use population::PopulationTable;
pub use timeseries::Timeseries;
pub use turnover::Turnover;
pub use types::{AgentRecord, GroupSelection};

/// Key used by [`Timeseries::births`] and [`Timeseries::deaths`] when no
/// group selection is given.
pub const ALL_GROUPS: &str = "all";
