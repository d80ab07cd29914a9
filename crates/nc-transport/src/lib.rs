//! `nc-transport` — one-tick Monte Carlo transport of the particle arena.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`collision`] | `resolve_collision`, `CollisionOutcome`, `secondary_count`     |
//! | [`engine`]    | `TransportEngine` — per-tick collide / move / wrap loop        |
//! | [`stats`]     | `StepStats` — per-tick population accounting                  |
//!
//! # Tick model
//!
//! Every active particle, in store order:
//!
//! 1. If `distance_to_collision < 0`, run the collision resolver.  A capture
//!    ends the particle's tick.
//! 2. Fly `speed × dt` along `direction`, subtracting the same from
//!    `distance_to_collision`.
//! 3. Wrap x and y onto the torus.
//!
//! Collisions are only resolved at tick boundaries: a particle whose flight
//! distance runs out mid-tick finishes the tick on its old heading and
//! collides at the start of the next one.  At the default 2 cm per tick
//! against a ~3 cm mean free path this is an accepted approximation.

pub mod collision;
pub mod engine;
pub mod stats;


pub use collision::{CollisionOutcome, resolve_collision, secondary_count};
pub use engine::TransportEngine;
pub use stats::StepStats;
