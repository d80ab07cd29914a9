//! Collision resolution: capture, fission, or scatter.
//!
//! # Random-number order
//!
//! For reproducibility the draws happen in a fixed order:
//!
//! 1. `ξ` selecting the reaction.
//! 2. Fission only: one draw for the stochastic rounding of ν, then for each
//!    new secondary its direction followed by its flight distance.
//! 3. Fission or scatter: the parent's new flight distance, then its new
//!    direction.
//!
//! A captured particle draws nothing after `ξ`; its slot keeps its last state
//! until reused.

use nc_core::{CrossSections, NcResult, SimRng, SlotId};
use nc_particle::{Particle, ParticleStore};

/// What happened at a collision site.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The particle was absorbed and its slot deactivated.
    Capture,
    /// The particle continues as one of the fission neutrons; `spawned` new
    /// particles were added to the store.
    Fission { spawned: u32 },
    /// New direction and flight distance, no population change.
    Scatter,
}

/// Number of neutrons emitted by one fission.
///
/// `floor(ν)`, plus one with probability `ν − floor(ν)`, so the mean is
/// exactly ν.  Always consumes exactly one draw.
pub fn secondary_count(nu: f64, rng: &mut SimRng) -> u32 {
    let whole = nu.floor();
    let mut n = whole as u32;
    if rng.gen_bool(nu - whole) {
        n += 1;
    }
    n
}

/// Resolve a due collision for the particle in `slot`.
///
/// `particle` is the caller's working copy of that slot.  On capture the
/// slot is deactivated in `store` and `particle.active` is cleared; the
/// caller must not write the copy back.  Otherwise `particle` leaves with a
/// fresh direction and a non-negative flight distance, and any fission
/// secondaries have already been placed in `store` via
/// [`ParticleStore::acquire_slot`].
///
/// # Errors
///
/// `NcError::SlotLimit` if a fission secondary does not fit in `store`.
pub fn resolve_collision(
    slot:     SlotId,
    particle: &mut Particle,
    xs:       &CrossSections,
    store:    &mut ParticleStore,
    rng:      &mut SimRng,
) -> NcResult<CollisionOutcome> {
    let total = xs.total();
    let xi = rng.uniform();

    if xi < xs.capture / total {
        particle.active = false;
        store.deactivate(slot);
        return Ok(CollisionOutcome::Capture);
    }

    let outcome = if xi < (xs.capture + xs.fission) / total {
        // The parent is one of the emitted neutrons.
        let spawned = secondary_count(xs.nu, rng).saturating_sub(1);
        for _ in 0..spawned {
            let mut child = *particle;
            child.direction = rng.isotropic_direction();
            child.distance_to_collision = rng.flight_distance(total);
            store.acquire_slot(child)?;
        }
        CollisionOutcome::Fission { spawned }
    } else {
        CollisionOutcome::Scatter
    };

    particle.distance_to_collision = rng.flight_distance(total);
    particle.direction = rng.isotropic_direction();
    Ok(outcome)
}
