//! `sd-agent` — the robot model: true pose, landmarks, noisy sense and move.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`robot`]       | `Robot` — pose, landmark set, `sense` / `move_by`     |
//! | [`measurement`] | `Measurement` — one noisy relative landmark offset    |
//! | [`model`]       | `AgentModel` — the trait the generator drives         |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                        |
//!
//! # Lifecycle
//!
//! 1. `Robot::new(world)` validates the config and puts the robot at the
//!    centre of the world.
//! 2. `Robot::place_landmarks(n, rng)` draws the landmark set once.
//! 3. `Robot::sense(rng)` and `Robot::move_by(dx, dy, rng)` are called in
//!    alternation by the trajectory generator.
//!
//! A move that would leave `[0, world_size)` is rejected and leaves the pose
//! untouched; it is an expected outcome, not an error.

pub mod error;
pub mod measurement;
pub mod model;
pub mod robot;


pub use error::{AgentError, AgentResult};
pub use measurement::Measurement;
pub use model::AgentModel;
pub use robot::Robot;
