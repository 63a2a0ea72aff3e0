//! Fluent builder for constructing a [`TrajectoryGenerator`].

use sd_agent::Robot;
use sd_core::{NoiseModel, Randomness, SimRng, WorldConfig};

use crate::{GenerateResult, GeneratorConfig, TrajectoryGenerator};

/// Fluent builder for [`TrajectoryGenerator`].
///
/// # Required inputs
///
/// - [`WorldConfig`] — world size, sensing range, noise levels
/// - `steps` — episode length `N` (dataset holds `N - 1` records)
/// - `num_landmarks`
/// - `distance` — length of every motion step
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                |
/// |---------------------------|------------------------|
/// | `.seed(s)`                | `42`                   |
/// | `.noise_model(m)`         | `NoiseModel::Gaussian` |
/// | `.max_episodes(n)`        | unbounded              |
/// | `.max_move_retries(n)`    | unbounded              |
///
/// # Example
///
/// ```rust,ignore
/// let mut generator = GeneratorBuilder::new(world, 20, 5, 20.0)
///     .seed(7)
///     .max_episodes(10_000)
///     .build()?;
/// let data = generator.generate_silent()?;
/// ```
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    /// Create a builder with all required inputs.
    pub fn new(world: WorldConfig, steps: usize, num_landmarks: usize, distance: f64) -> Self {
        Self {
            config: GeneratorConfig {
                steps,
                num_landmarks,
                distance,
                world,
                ..GeneratorConfig::default()
            },
        }
    }

    /// Start from an existing config (e.g. one loaded from a file).
    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn noise_model(mut self, model: NoiseModel) -> Self {
        self.config.noise_model = model;
        self
    }

    /// Fail with `EpisodeLimit` instead of starting episode `n + 1`.
    pub fn max_episodes(mut self, n: u64) -> Self {
        self.config.max_episodes = Some(n);
        self
    }

    /// Fail with `MoveRetryLimit` after `n` consecutive rejected moves.
    pub fn max_move_retries(mut self, n: u64) -> Self {
        self.config.max_move_retries = Some(n);
        self
    }

    /// The config as built so far.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate and return a generator backed by a seeded [`SimRng`].
    pub fn build(self) -> GenerateResult<TrajectoryGenerator<SimRng, Robot>> {
        TrajectoryGenerator::from_config(self.config)
    }

    /// Validate and return a generator drawing from `rng` instead.
    pub fn build_with_rng<R: Randomness>(self, rng: R) -> GenerateResult<TrajectoryGenerator<R, Robot>> {
        TrajectoryGenerator::with_rng(self.config, rng)
    }
}
