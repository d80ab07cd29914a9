//! Fluent builder for constructing a [`Sim`].

use nc_core::{SimConfig, SimRng};
use nc_particle::{ParticleStore, ParticleStoreBuilder};
use nc_transport::{StepStats, TransportEngine};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: cross sections, speed, tick duration, domain, seed, …
/// - the requested initial particle count (rounded to a 2:1 grid)
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                     |
/// |-----------------------|---------------------------------------------|
/// | `.headroom(n)`        | As many spare slots as initial particles    |
/// | `.initial_store(s)`   | Grid layout from `ParticleStoreBuilder`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, 5_000)
///     .headroom(20_000)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:    SimConfig,
    requested: usize,
    headroom:  Option<usize>,
    store:     Option<ParticleStore>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, requested: usize) -> Self {
        Self {
            config,
            requested,
            headroom: None,
            store:    None,
        }
    }

    /// Spare inactive slots reserved after the initial grid.
    pub fn headroom(mut self, slots: usize) -> Self {
        self.headroom = Some(slots);
        self
    }

    /// Start from a caller-built store instead of the grid layout.
    ///
    /// The requested count and headroom are ignored; the store must hold at
    /// least one active particle.
    pub fn initial_store(mut self, store: ParticleStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate every input, then seed the RNG and lay out the particles.
    ///
    /// Nothing is constructed if validation fails.
    pub fn build(self) -> SimResult<Sim> {
        let engine = TransportEngine::new(&self.config)?;
        let mut rng = SimRng::new(self.config.seed);

        let store = match self.store {
            Some(store) => {
                if store.active_count() == 0 {
                    return Err(SimError::EmptyPopulation(0));
                }
                store
            }
            None => {
                if self.requested == 0 {
                    return Err(SimError::EmptyPopulation(0));
                }
                let mut builder = ParticleStoreBuilder::new(self.requested);
                if let Some(h) = self.headroom {
                    builder = builder.headroom(h);
                }
                builder.build(&self.config.domain, &mut rng)?
            }
        };

        log::debug!(
            "built sim: {} particles in {} slots, k_inf = {:.4}, mfp = {:.3}, seed = {}",
            store.active_count(),
            store.len(),
            self.config.cross_sections.k_infinity(),
            self.config.cross_sections.mean_free_path(),
            self.config.seed,
        );

        let initial = store.active_count();
        Ok(Sim {
            clock:  self.config.make_clock(),
            config: self.config,
            store,
            rng,
            engine,
            totals: StepStats {
                active_before: initial,
                active_after:  initial,
                ..StepStats::default()
            },
        })
    }
}
