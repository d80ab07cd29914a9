//! `nc-sim` — tick loop driver for the neutron clustering engine.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① on_tick_start(tick)
//!   ② TransportEngine::step: resolve due collisions, then fly and wrap
//!   ③ on_tick_end(tick, &stats)
//!   ④ on_snapshot(tick, &store)   every `output_interval_ticks`
//! on_sim_end(final_tick, &totals)
//! ```
//!
//! A step is atomic from the observer's point of view: hooks only ever see
//! the store between steps, never mid-spawn.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nc_core::SimConfig;
//! use nc_sim::{LoggingObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), 2_000).build()?;
//! sim.run(&mut LoggingObserver::new(1_000))?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LoggingObserver, NoopObserver, SimObserver};
pub use sim::Sim;
