//! The `Sim` struct and its tick loop.

use nc_core::{SimClock, SimConfig, SimRng, Tick};
use nc_particle::{ParticleSnapshot, ParticleStore};
use nc_transport::{StepStats, TransportEngine};

use crate::{SimError, SimObserver, SimResult};

/// The simulation driver.
///
/// Exclusively owns the particle store and the RNG; both are mutated only
/// inside [`step`](Self::step).  Create via [`SimBuilder`][crate::SimBuilder].
///
/// Between steps the store is readable through [`store`](Self::store) but
/// cannot be changed from outside:
///
/// ```compile_fail
/// use nc_core::{SimConfig, SlotId};
/// use nc_sim::SimBuilder;
///
/// let mut sim = SimBuilder::new(SimConfig::default(), 8).build().unwrap();
/// sim.store.deactivate(SlotId(0));
/// ```
///
/// Nor can the random stream be advanced or replaced:
///
/// ```compile_fail
/// use nc_core::SimConfig;
/// use nc_sim::SimBuilder;
///
/// let mut sim = SimBuilder::new(SimConfig::default(), 8).build().unwrap();
/// let _ = sim.rng.uniform();
/// ```
pub struct Sim {
    /// Immutable run configuration.
    pub config: SimConfig,

    /// Tracks the current tick and elapsed physical time.
    pub clock: SimClock,

    /// All particle slots.
    pub(crate) store: ParticleStore,

    /// The run's only random stream, seeded from `config.seed`.
    pub(crate) rng: SimRng,

    /// Collide / fly / wrap kernel built from `config`.
    pub(crate) engine: TransportEngine,

    /// Counters accumulated over every step so far.
    pub totals: StepStats,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick of `config.tick_duration_secs`.
    ///
    /// # Errors
    ///
    /// `SimError::Core` wrapping `NcError::SlotLimit` if fission outgrows
    /// the store.  The clock and totals are left at the failed tick.
    pub fn step(&mut self) -> SimResult<StepStats> {
        let stats = self.engine.step(&mut self.store, &mut self.rng)?;
        self.totals.accumulate(&stats);
        self.clock.advance();
        Ok(stats)
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.process_tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick, &self.totals);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and frame-by-frame driving from a render loop.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_tick(observer)?;
        }
        Ok(())
    }

    /// Read-only view of every particle slot, for rendering or output.
    #[inline]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// Position, lineage, and active flag for every slot, in store order.
    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.store.snapshot()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.store.active_count()
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let stats = self.step()?;
        if !stats.is_balanced() {
            return Err(SimError::Accounting { tick: now, stats });
        }
        log::trace!(
            "{now}: active {} -> {}, {} collisions, +{} -{}",
            stats.active_before,
            stats.active_after,
            stats.collisions(),
            stats.spawned,
            stats.captures,
        );
        if stats.active_before > 0 && stats.active_after == 0 {
            log::info!("population died out at {now}");
        }

        observer.on_tick_end(now, &stats);
        if now.is_multiple_of(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.store);
        }
        Ok(())
    }
}
