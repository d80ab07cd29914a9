//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use nc_core::{SimConfig, Tick};
use nc_particle::ParticleStore;
use nc_sim::SimObserver;
use nc_transport::StepStats;

use crate::row::{ParticleSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes particle snapshots and tick summaries to an
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: f64,
    active_only:        bool,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// tick → seconds conversion.  Every slot is written by default.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            active_only:        false,
            last_error:         None,
        }
    }

    /// Skip inactive slots in snapshot output.
    pub fn active_only(mut self, yes: bool) -> Self {
        self.active_only = yes;
        self
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &StepStats) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: (tick.0 + 1) as f64 * self.tick_duration_secs,
            active:       stats.active_after as u64,
            captures:     stats.captures,
            fissions:     stats.fissions,
            scatters:     stats.scatters,
            spawned:      stats.spawned,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, store: &ParticleStore) {
        let rows: Vec<ParticleSnapshotRow> = store
            .snapshot()
            .into_iter()
            .filter(|s| s.active || !self.active_only)
            .map(|s| ParticleSnapshotRow {
                tick:    tick.0,
                slot:    s.slot.0,
                x:       s.position.x,
                y:       s.position.y,
                z:       s.position.z,
                lineage: s.lineage.0,
                active:  s.active,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _totals: &StepStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
