//! `ParticleStore` — the growable particle arena.
//!
//! # Free list
//!
//! Inactive slots are tracked in a min-heap of `SlotId`s, so
//! [`acquire_slot`](ParticleStore::acquire_slot) always reuses the lowest
//! free index in O(log n).  That is the slot a front-to-back scan for the
//! first inactive particle would find, so the sequence of slots handed out
//! for a given seed does not depend on the free-list implementation.
//!
//! Invariant: a `SlotId` is in `free` if and only if the slot is inactive.
//!
//! # Slot limit
//!
//! `SlotId` is a `u32` with `u32::MAX` reserved as `INVALID`, so the arena
//! holds at most [`ParticleStore::MAX_SLOTS`] slots.  A lower limit can be set
//! with [`with_slot_limit`](ParticleStore::with_slot_limit) to cap memory in
//! supercritical runs.  Growth past the limit is an error, never a wrap, so
//! every index below `len()` converts to a `SlotId` losslessly.
//!
//! Growth by `push` may reallocate the backing `Vec`; callers hold `SlotId`s,
//! never references, across a transport step.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nc_core::{NcError, NcResult, SlotId};

use crate::{Particle, ParticleSnapshot};

/// Ordered arena of particle slots.
pub struct ParticleStore {
    particles: Vec<Particle>,
    free:      BinaryHeap<Reverse<SlotId>>,
    active:    usize,
    limit:     usize,
}

impl ParticleStore {
    /// Largest number of slots any store can hold.
    pub const MAX_SLOTS: usize = SlotId::INVALID.0 as usize;

    /// Wrap an existing slot vector, rebuilding the free list from the
    /// `active` flags.
    ///
    /// # Panics
    /// Panics if `particles` is longer than [`MAX_SLOTS`](Self::MAX_SLOTS).
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        assert!(
            particles.len() <= Self::MAX_SLOTS,
            "{} particles exceed the slot limit",
            particles.len()
        );
        let mut free = BinaryHeap::new();
        let mut active = 0;
        for (i, p) in particles.iter().enumerate() {
            if p.active {
                active += 1;
            } else {
                free.push(Reverse(SlotId(i as u32)));
            }
        }
        Self {
            particles,
            free,
            active,
            limit: Self::MAX_SLOTS,
        }
    }

    /// Cap the arena at `limit` slots (never below the current length, never
    /// above [`MAX_SLOTS`](Self::MAX_SLOTS)).
    pub fn with_slot_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(self.particles.len(), Self::MAX_SLOTS);
        self
    }

    /// Most slots this store may grow to.
    #[inline]
    pub fn slot_limit(&self) -> usize {
        self.limit
    }

    /// Total number of slots, active or not.  Never decreases.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of active particles.  O(1).
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Number of slots available for reuse.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Slots the arena can hold before its next reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.capacity()
    }

    /// Read-only slice of every slot in store order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn get(&self, slot: SlotId) -> Option<&Particle> {
        self.particles.get(slot.index())
    }

    /// Mutable access to one slot.
    ///
    /// Do not flip `active` through this reference; use
    /// [`deactivate`](Self::deactivate) / [`acquire_slot`](Self::acquire_slot)
    /// so the free list stays in sync.
    #[inline]
    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut Particle> {
        self.particles.get_mut(slot.index())
    }

    /// `SlotId`s of the active particles, in store order.
    pub fn active_ids(&self) -> Vec<SlotId> {
        self.iter_active().map(|(slot, _)| slot).collect()
    }

    /// Active particles with their slot, in store order.
    pub fn iter_active(&self) -> impl Iterator<Item = (SlotId, &Particle)> + '_ {
        self.particles
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, p)| (SlotId(i as u32), p))
    }

    /// Apply `f` to every active slot in store order.
    ///
    /// `f` must not change `active`; population changes go through the
    /// transport engine.
    pub fn for_each_active<F>(&mut self, mut f: F)
    where
        F: FnMut(SlotId, &mut Particle),
    {
        for (i, p) in self.particles.iter_mut().enumerate() {
            if p.active {
                f(SlotId(i as u32), p);
            }
        }
    }

    /// Place a copy of `template` in the lowest free slot, or append one.
    ///
    /// The stored copy is always active regardless of `template.active`.
    ///
    /// # Errors
    ///
    /// `NcError::SlotLimit` if no slot is free and the arena is already at
    /// its slot limit.  The store is unchanged in that case.
    pub fn acquire_slot(&mut self, template: Particle) -> NcResult<SlotId> {
        let mut particle = template;
        particle.active = true;

        let slot = match self.free.pop() {
            Some(Reverse(slot)) => {
                self.particles[slot.index()] = particle;
                slot
            }
            None => {
                if self.particles.len() >= self.limit {
                    return Err(NcError::SlotLimit(self.limit));
                }
                let slot = SlotId(self.particles.len() as u32);
                self.particles.push(particle);
                slot
            }
        };
        self.active += 1;
        Ok(slot)
    }

    /// Mark `slot` inactive and return it to the free list.
    ///
    /// The particle's other fields are left as they were until the slot is
    /// reused.  Returns `false` if the slot was already inactive.
    ///
    /// # Panics
    /// Panics if `slot` is out of range.
    pub fn deactivate(&mut self, slot: SlotId) -> bool {
        let p = &mut self.particles[slot.index()];
        if !p.active {
            return false;
        }
        p.active = false;
        self.active -= 1;
        self.free.push(Reverse(slot));
        true
    }

    /// One snapshot per slot, in store order.
    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, p)| ParticleSnapshot {
                slot:     SlotId(i as u32),
                position: p.position,
                lineage:  p.lineage,
                active:   p.active,
            })
            .collect()
    }
}
