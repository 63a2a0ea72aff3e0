//! `sd-trajectory` — episode loop producing landmark-complete SLAM datasets.
//!
//! # Episode loop
//!
//! ```text
//! precondition: throwaway agent, place landmarks, sense once → must be Ok
//!
//! loop (episode = 1, 2, …):
//!   ① Spawn    — fresh agent at the world centre, place landmarks.
//!   ② Heading  — θ ~ U[0, 2π), step = distance·(cos θ, sin θ).
//!   ③ Steps    — repeat N-1 times:
//!                  sense → mark landmarks seen
//!                  move  → on rejection pick a new heading, retry
//!                  record (measurements, [dx, dy, x, y])
//!   ④ Coverage — every landmark seen?  accept : discard everything, loop
//! ```
//!
//! Both the move retry in ③ and the episode loop are unbounded by default.
//! `GeneratorConfig::max_move_retries` and `GeneratorConfig::max_episodes`
//! cap them for callers that need a hard stop.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sd_core::WorldConfig;
//! use sd_trajectory::{GeneratorBuilder, TracingObserver};
//!
//! let world = WorldConfig::new(100.0, 50.0, 2.0, 2.0);
//! let mut generator = GeneratorBuilder::new(world, 20, 5, 20.0).seed(7).build()?;
//! let data = generator.generate(&mut TracingObserver)?;
//! println!("{} steps after {} episode(s)", data.dataset.len(), data.episodes);
//! ```

pub mod builder;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::GeneratorBuilder;
pub use config::GeneratorConfig;
pub use dataset::{Dataset, GeneratedData, Motion, Step};
pub use error::{GenerateError, GenerateResult};
pub use generator::TrajectoryGenerator;
pub use observer::{GeneratorObserver, NoopObserver, StatsObserver, TracingObserver};
