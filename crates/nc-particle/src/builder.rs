//! Fluent builder for the initial particle population.
//!
//! # Usage
//!
//! ```rust
//! use nc_core::{Domain, SimRng};
//! use nc_particle::ParticleStoreBuilder;
//!
//! let mut rng = SimRng::new(1);
//! let store = ParticleStoreBuilder::new(200)
//!     .build(&Domain::default(), &mut rng)
//!     .unwrap();
//!
//! // 10 rows × 20 columns, plus the same number of spare slots.
//! assert_eq!(store.active_count(), 200);
//! assert_eq!(store.len(), 400);
//! ```

use nc_core::{Domain, LineageId, NcError, NcResult, Position, SimRng};

use crate::{Particle, ParticleStore};

/// Nearest `(rows, cols)` grid to `requested` points with a 2:1
/// column-to-row aspect ratio.  Both are at least 1.
pub fn grid_shape(requested: usize) -> (usize, usize) {
    let rows = ((requested as f64 / 2.0).sqrt().round() as usize).max(1);
    let cols = ((requested as f64 / rows as f64).round() as usize).max(1);
    (rows, cols)
}

/// Lays out the initial population on an evenly spaced grid and reserves
/// spare slots for fission growth.
pub struct ParticleStoreBuilder {
    requested: usize,
    headroom:  Option<usize>,
}

impl ParticleStoreBuilder {
    /// Request roughly `requested` particles.  The actual count is
    /// `rows * cols` from [`grid_shape`].
    pub fn new(requested: usize) -> Self {
        Self { requested, headroom: None }
    }

    /// Number of inactive placeholder slots appended after the grid.
    ///
    /// Defaults to the grid size, which absorbs ordinary fission growth
    /// without reallocating.
    pub fn headroom(mut self, slots: usize) -> Self {
        self.headroom = Some(slots);
        self
    }

    /// Build the store.
    ///
    /// Particles are placed at cell centres row by row, each with its own
    /// isotropic direction drawn from `rng` in that order and a distinct
    /// `LineageId` equal to its index.  Every particle starts with a
    /// collision due so its first flight distance is sampled on step one.
    ///
    /// # Errors
    ///
    /// `NcError::Config` if zero particles were requested, `domain` is
    /// degenerate, or the layout would not fit in a store.  Nothing is drawn from `rng` in that case.
    pub fn build(self, domain: &Domain, rng: &mut SimRng) -> NcResult<ParticleStore> {
        if self.requested == 0 {
            return Err(NcError::config("particle count must be positive"));
        }
        domain.validate()?;

        let (rows, cols) = grid_shape(self.requested);
        let count = rows * cols;
        let headroom = self.headroom.unwrap_or(count);
        let slots = count
            .checked_add(headroom)
            .filter(|&n| n <= ParticleStore::MAX_SLOTS)
            .ok_or_else(|| {
                NcError::config(format!(
                    "{count} particles plus {headroom} spare slots exceed the slot limit"
                ))
            })?;

        let dx = domain.width / cols as f64;
        let dy = domain.height / rows as f64;

        let mut particles = Vec::with_capacity(slots);
        for row in 0..rows {
            for col in 0..cols {
                let position = Position::new((col as f64 + 0.5) * dx, (row as f64 + 0.5) * dy, 0.0);
                let lineage = LineageId(particles.len() as u32);
                particles.push(Particle::new(position, rng.isotropic_direction(), lineage));
            }
        }
        particles.resize(slots, Particle::placeholder());

        Ok(ParticleStore::from_particles(particles))
    }
}
