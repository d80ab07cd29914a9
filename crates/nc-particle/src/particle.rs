//! The per-slot particle record.

use nc_core::{Direction, LineageId, Position, SlotId};

/// One neutron.
///
/// `Copy` on purpose: the transport step copies a particle out of its slot,
/// resolves it (which may grow the arena), and writes it back, so no borrow
/// of the arena is held across a spawn.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    pub position: Position,

    /// Unit vector.  Written only from `SimRng::isotropic_direction`.
    pub direction: Direction,

    /// Remaining distance before the next collision.  Negative means a
    /// collision is due (including "never sampled yet").
    pub distance_to_collision: f64,

    /// Inactive slots are skipped by the transport step and reused by
    /// `ParticleStore::acquire_slot`.
    pub active: bool,

    /// Opaque family tag, copied to fission secondaries.
    pub lineage: LineageId,
}

impl Particle {
    /// Sentinel for `distance_to_collision`: resolve a collision before moving.
    pub const NEEDS_FLIGHT_DISTANCE: f64 = -1.0;

    /// A live particle whose first collision is resolved on its first step.
    pub fn new(position: Position, direction: Direction, lineage: LineageId) -> Self {
        Self {
            position,
            direction,
            distance_to_collision: Self::NEEDS_FLIGHT_DISTANCE,
            active: true,
            lineage,
        }
    }

    /// An inert slot reserved for future fission secondaries.
    pub fn placeholder() -> Self {
        Self {
            position:              Position::zeros(),
            direction:             Direction::x(),
            distance_to_collision: Self::NEEDS_FLIGHT_DISTANCE,
            active:                false,
            lineage:               LineageId::INVALID,
        }
    }

    /// `true` when the transport step must run the collision resolver.
    #[inline]
    pub fn collision_due(&self) -> bool {
        self.distance_to_collision < 0.0
    }
}

/// Read-only view of one slot handed to renderers and output writers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleSnapshot {
    pub slot:     SlotId,
    pub position: Position,
    pub lineage:  LineageId,
    pub active:   bool,
}
