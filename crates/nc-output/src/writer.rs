//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, ParticleSnapshotRow, TickSummaryRow};

/// A sink for snapshot and summary rows.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// keeps the first one for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of particle snapshot rows.
    fn write_snapshots(&mut self, rows: &[ParticleSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
