//! The per-tick transport loop.

use nc_core::{CrossSections, Domain, NcResult, SimConfig, SimRng, SlotId};
use nc_particle::{Particle, ParticleStore};

use crate::{CollisionOutcome, StepStats, resolve_collision};

/// Advances a [`ParticleStore`] by one tick at a time.
///
/// Holds only immutable run parameters; all mutable state (the store and the
/// RNG) is passed in by the caller, so one engine can drive several stores.
#[derive(Clone, Debug)]
pub struct TransportEngine {
    xs:     CrossSections,
    domain: Domain,
    /// `speed × dt`, the distance flown per tick.
    travel: f64,
}

impl TransportEngine {
    /// Build from a validated copy of `config`.
    ///
    /// # Errors
    ///
    /// `NcError::Config` if any part of `config` is invalid.
    pub fn new(config: &SimConfig) -> NcResult<Self> {
        config.validate()?;
        Ok(Self {
            xs:     config.cross_sections,
            domain: config.domain,
            travel: config.travel_per_tick(),
        })
    }

    #[inline]
    pub fn cross_sections(&self) -> &CrossSections {
        &self.xs
    }

    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Run one tick over every active particle in store order.
    ///
    /// The loop re-reads `store.len()` each iteration, so secondaries
    /// appended during this tick (or placed in a free slot above the current
    /// index) are also moved this tick.  Secondaries placed below the current
    /// index wait for the next tick.
    ///
    /// # Errors
    ///
    /// `NcError::SlotLimit` if fission outgrows the store; the tick is
    /// abandoned part-way and the store should be discarded.
    pub fn step(&self, store: &mut ParticleStore, rng: &mut SimRng) -> NcResult<StepStats> {
        let mut stats = StepStats {
            active_before: store.active_count(),
            ..StepStats::default()
        };

        let mut i = 0;
        while i < store.len() {
            let slot = SlotId(i as u32);
            i += 1;

            let mut particle = match store.get(slot) {
                Some(p) if p.active => *p,
                _ => continue,
            };

            if particle.collision_due() {
                match resolve_collision(slot, &mut particle, &self.xs, store, rng)? {
                    CollisionOutcome::Capture => {
                        stats.captures += 1;
                        continue;
                    }
                    CollisionOutcome::Fission { spawned } => {
                        stats.fissions += 1;
                        stats.spawned += u64::from(spawned);
                    }
                    CollisionOutcome::Scatter => stats.scatters += 1,
                }
            }

            self.advance(&mut particle);
            if let Some(p) = store.get_mut(slot) {
                *p = particle;
            }
        }

        stats.active_after = store.active_count();
        Ok(stats)
    }

    /// Straight-line flight for one tick followed by the toroidal wrap.
    ///
    /// The flight path is 3-D, so `distance_to_collision` drops by the full
    /// `travel`, but only its x/y projection is applied: the domain is a
    /// plane and `z` stays where it started.
    #[inline]
    pub fn advance(&self, particle: &mut Particle) {
        particle.position.x += particle.direction.x * self.travel;
        particle.position.y += particle.direction.y * self.travel;
        particle.distance_to_collision -= self.travel;
        self.domain.wrap(&mut particle.position);
    }
}
