//! `nc-output` — snapshot and tick-summary writers for the neutron
//! clustering engine.
//!
//! | Backend | Files created                                       |
//! |---------|-----------------------------------------------------|
//! | CSV     | `particle_snapshots.csv`, `tick_summaries.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `nc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ParticleSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
