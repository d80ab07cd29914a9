//! Simulation observer trait for progress reporting and data collection.

use nc_core::Tick;
use nc_particle::ParticleStore;
use nc_transport::StepStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  A renderer implements `on_snapshot` and
/// maps each active slot's lineage to a colour.
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the transport step for `tick` completes.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &StepStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with the store as it stands after the step.
    fn on_snapshot(&mut self, _tick: Tick, _store: &ParticleStore) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick, _totals: &StepStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Reports the population through the `log` facade every `interval` ticks.
pub struct LoggingObserver {
    interval: u64,
}

impl LoggingObserver {
    pub fn new(interval: u64) -> Self {
        Self { interval }
    }
}

impl SimObserver for LoggingObserver {
    fn on_tick_end(&mut self, tick: Tick, stats: &StepStats) {
        if tick.is_multiple_of(self.interval) {
            log::info!(
                "{tick}: {} active ({} captures, {} fissions, {} scatters)",
                stats.active_after,
                stats.captures,
                stats.fissions,
                stats.scatters,
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, totals: &StepStats) {
        log::info!(
            "finished at {final_tick}: {} -> {} active, {} captures, {} fissions (+{} neutrons)",
            totals.active_before,
            totals.active_after,
            totals.captures,
            totals.fissions,
            totals.spawned,
        );
    }
}
