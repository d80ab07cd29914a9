//! `nc-particle` — particle records and the growable particle arena.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`particle`]    | `Particle` (physics record), `ParticleSnapshot`           |
//! | [`store`]       | `ParticleStore` — arena of slots + free list              |
//! | [`builder`]     | `ParticleStoreBuilder` — grid layout + headroom           |
//!
//! # Slot discipline
//!
//! The arena never shrinks.  A slot is either active or on the free list.
//! New particles always take the **lowest-index** free slot before the arena
//! grows, which matches a front-to-back scan for the first inactive slot and
//! keeps runs reproducible for a given seed.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Particle` and snapshots. |

pub mod builder;
pub mod particle;
pub mod store;


pub use builder::{ParticleStoreBuilder, grid_shape};
pub use particle::{Particle, ParticleSnapshot};
pub use store::ParticleStore;
