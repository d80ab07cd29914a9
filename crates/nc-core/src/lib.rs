//! `nc-core` — foundational types for the neutron clustering engine.
//!
//! This crate is a dependency of every other `nc-*` crate.  It intentionally
//! has no `nc-*` dependencies and few external ones (`rand`, `nalgebra`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SlotId`, `LineageId`                                 |
//! | [`domain`]      | `Domain` (rectangular torus), `Position`, `Direction` |
//! | [`xs`]          | `CrossSections` and collision probabilities           |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` — uniform, isotropic, free-flight sampling   |
//! | [`error`]       | `NcError`, `NcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod domain;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod xs;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use domain::{Direction, Domain, Position};
pub use error::{NcError, NcResult};
pub use ids::{LineageId, SlotId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
pub use xs::CrossSections;
