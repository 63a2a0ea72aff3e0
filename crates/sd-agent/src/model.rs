//! The `AgentModel` trait — what the trajectory generator drives.

use sd_core::{Point2, Randomness, WorldConfig};

use crate::{AgentResult, Measurement, Robot};

/// Pluggable agent model.
///
/// [`Robot`] is the stock implementation.  The trajectory generator only
/// talks to agents through this trait, so alternative sensor or motion
/// models can be swapped in at compile time.
///
/// # Contract
///
/// - [`spawn`][Self::spawn] puts a fresh agent at its start pose with no
///   landmarks.
/// - [`sense`][Self::sense] must return `Ok` (possibly empty) once landmarks
///   are placed.  An `Err` at that point means the model is not usable; the
///   generator treats it as fatal.
/// - [`move_by`][Self::move_by] returns `false` for a rejected move and must
///   leave the pose untouched in that case.
pub trait AgentModel: Sized {
    fn spawn(world: &WorldConfig) -> AgentResult<Self>;

    fn place_landmarks<R: Randomness>(&mut self, count: usize, rng: &mut R) -> AgentResult<()>;

    fn sense<R: Randomness>(&self, rng: &mut R) -> AgentResult<Vec<Measurement>>;

    fn move_by<R: Randomness>(&mut self, dx: f64, dy: f64, rng: &mut R) -> bool;

    /// True (noise-free) position.
    fn position(&self) -> Point2;

    /// Ground-truth landmark positions in index order.
    fn landmarks(&self) -> &[Point2];
}

impl AgentModel for Robot {
    fn spawn(world: &WorldConfig) -> AgentResult<Self> {
        Robot::new(world.clone())
    }

    fn place_landmarks<R: Randomness>(&mut self, count: usize, rng: &mut R) -> AgentResult<()> {
        Robot::place_landmarks(self, count, rng)
    }

    fn sense<R: Randomness>(&self, rng: &mut R) -> AgentResult<Vec<Measurement>> {
        Robot::sense(self, rng)
    }

    fn move_by<R: Randomness>(&mut self, dx: f64, dy: f64, rng: &mut R) -> bool {
        Robot::move_by(self, dx, dy, rng)
    }

    fn position(&self) -> Point2 {
        Robot::position(self)
    }

    fn landmarks(&self) -> &[Point2] {
        Robot::landmarks(self)
    }
}
