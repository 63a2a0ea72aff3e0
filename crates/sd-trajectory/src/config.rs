//! Generator configuration.

use sd_core::{NoiseModel, WorldConfig};

use crate::{GenerateError, GenerateResult};

/// Everything needed to generate one dataset.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and handed to
/// [`TrajectoryGenerator::from_config`][crate::TrajectoryGenerator::from_config].
/// Missing fields fall back to [`GeneratorConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    /// Episode length `N`.  Each dataset holds `N - 1` steps.  Must be `>= 2`.
    pub steps: usize,

    /// Number of landmarks placed in each episode.
    pub num_landmarks: usize,

    /// Length of every intended motion step.  Must be finite and `> 0`.
    ///
    /// A distance larger than the world makes every move fail; with no
    /// `max_move_retries` the generator then never returns.
    pub distance: f64,

    /// World size, sensing range, and noise levels.
    pub world: WorldConfig,

    /// Master RNG seed.  The same seed always produces the same dataset.
    pub seed: u64,

    /// Shape of motion and measurement noise.
    pub noise_model: NoiseModel,

    /// Give up after this many episodes without full coverage.
    /// `None` retries forever.
    pub max_episodes: Option<u64>,

    /// Give up after this many consecutive rejected moves within one step.
    /// `None` retries forever.
    pub max_move_retries: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            steps:            20,
            num_landmarks:    5,
            distance:         20.0,
            world:            WorldConfig::default(),
            seed:             42,
            noise_model:      NoiseModel::Gaussian,
            max_episodes:     None,
            max_move_retries: None,
        }
    }
}

impl GeneratorConfig {
    /// Number of records an accepted dataset holds (`steps - 1`).
    #[inline]
    pub fn records_per_episode(&self) -> usize {
        self.steps.saturating_sub(1)
    }

    pub fn validate(&self) -> GenerateResult<()> {
        self.world.validate()?;

        if self.steps < 2 {
            return Err(GenerateError::Config(format!(
                "steps must be >= 2, got {}",
                self.steps
            )));
        }
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(GenerateError::Config(format!(
                "distance must be finite and > 0, got {}",
                self.distance
            )));
        }
        if u32::try_from(self.num_landmarks).is_err() {
            return Err(GenerateError::Config(format!(
                "num_landmarks {} does not fit a landmark id",
                self.num_landmarks
            )));
        }
        if self.max_episodes == Some(0) {
            return Err(GenerateError::Config("max_episodes must be > 0".into()));
        }
        if self.max_move_retries == Some(0) {
            return Err(GenerateError::Config("max_move_retries must be > 0".into()));
        }
        Ok(())
    }
}
