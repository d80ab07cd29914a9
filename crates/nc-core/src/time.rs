//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to physical time is held in `SimClock`:
//!
//!   elapsed_secs = tick * tick_duration_secs
//!
//! The default tick is 1 µs; at the default speed of 2·10⁶ cm/s a particle
//! covers 2 cm (two display pixels) per tick.

use std::fmt;

use crate::{CrossSections, Domain, NcError, NcResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` if this tick falls on a multiple of `interval`.
    /// An interval of 0 never matches.
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and elapsed physical seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Physical seconds per tick.
    pub tick_duration_secs: f64,
    /// The current tick, advanced by `SimClock::advance()`.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_secs: f64) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_duration_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3e} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Immutable for the life of a run.  Passed by value to the simulation
/// builder, which validates it before any particle state exists.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Physical seconds per tick.  Default: 1e-6.
    pub tick_duration_secs: f64,

    /// Ticks simulated by `Sim::run`.  `run_ticks` ignores this bound.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Particle speed in cm/s.  All particles are mono-energetic.
    pub speed: f64,

    /// Periodic rectangle the particles live in.
    pub domain: Domain,

    /// Material data for the whole domain.
    pub cross_sections: CrossSections,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:    1e-6,
            total_ticks:           10_000,
            seed:                  1,
            output_interval_ticks: 100,
            speed:                 2.0e6,
            domain:                Domain::default(),
            cross_sections:        CrossSections::default(),
        }
    }
}

impl SimConfig {
    /// The tick at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }

    /// Distance every particle flies in one tick.
    #[inline]
    pub fn travel_per_tick(&self) -> f64 {
        self.speed * self.tick_duration_secs
    }

    /// Check every invariant the transport step relies on.
    pub fn validate(&self) -> NcResult<()> {
        if !(self.tick_duration_secs.is_finite() && self.tick_duration_secs > 0.0) {
            return Err(NcError::config(format!(
                "tick duration must be finite and positive, got {}",
                self.tick_duration_secs
            )));
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(NcError::config(format!(
                "particle speed must be finite and positive, got {}",
                self.speed
            )));
        }
        self.domain.validate()?;
        self.cross_sections.validate()
    }
}
