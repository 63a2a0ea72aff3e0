//! `sd-core` — foundational types for the `slam_data` dataset generator.
//!
//! This crate is a dependency of every other `sd-*` crate.  It has no `sd-*`
//! dependencies and few external ones (`rand`, `rand_distr`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `LandmarkId`                                             |
//! | [`geo`]    | `Point2`                                                 |
//! | [`world`]  | `WorldConfig`, `MeasurementRange`                        |
//! | [`rng`]    | `Randomness` trait, `SimRng`, `NoiseModel`               |
//! | [`error`]  | `SdError`, `SdResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SdError, SdResult};
pub use geo::Point2;
pub use ids::LandmarkId;
pub use rng::{NoiseModel, Randomness, SimRng};
pub use world::{MeasurementRange, WorldConfig};
