//! The `TrajectoryGenerator` and its episode loop.

use std::f64::consts::TAU;
use std::marker::PhantomData;

use sd_agent::{AgentModel, Robot};
use sd_core::{Randomness, SimRng};
use tracing::debug;

use crate::{
    Dataset, GenerateError, GenerateResult, GeneratedData, GeneratorConfig, GeneratorObserver,
    Motion, NoopObserver, Step,
};

/// Result of one episode attempt.
enum Episode<A> {
    Accepted { agent: A, dataset: Dataset },
    Incomplete { unseen: usize },
}

/// Drives an [`AgentModel`] through episodes until one observes every
/// landmark.
///
/// `R` supplies every random draw (landmarks, headings, noise); `A` is the
/// agent model, [`Robot`] unless replaced with
/// [`with_agent`][Self::with_agent].
///
/// Create via [`GeneratorBuilder`][crate::GeneratorBuilder] or
/// [`from_config`][TrajectoryGenerator::from_config].
pub struct TrajectoryGenerator<R: Randomness = SimRng, A: AgentModel = Robot> {
    config: GeneratorConfig,
    rng:    R,
    _agent: PhantomData<fn() -> A>,
}

impl TrajectoryGenerator<SimRng, Robot> {
    /// Validate `config` and seed a [`SimRng`] from `config.seed` and
    /// `config.noise_model`.
    pub fn from_config(config: GeneratorConfig) -> GenerateResult<Self> {
        let rng = SimRng::with_noise_model(config.seed, config.noise_model);
        Self::with_rng(config, rng)
    }
}

impl<R: Randomness, A: AgentModel> TrajectoryGenerator<R, A> {
    /// Validate `config` and use `rng` for every draw.  `config.seed` and
    /// `config.noise_model` are ignored.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> GenerateResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            _agent: PhantomData,
        })
    }

    /// Swap the agent model type, keeping config and RNG state.
    pub fn with_agent<B: AgentModel>(self) -> TrajectoryGenerator<R, B> {
        TrajectoryGenerator {
            config: self.config,
            rng:    self.rng,
            _agent: PhantomData,
        }
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Generate one landmark-complete dataset.
    ///
    /// Runs the sensing precondition first, then episodes until one is
    /// accepted.  Without `max_episodes` / `max_move_retries` this only
    /// returns once coverage is reached, which for hostile parameters
    /// (distance beyond the world, far more landmarks than steps can reach)
    /// is never.
    pub fn generate<O: GeneratorObserver>(
        &mut self,
        observer: &mut O,
    ) -> GenerateResult<GeneratedData<A>> {
        self.check_sensing()?;
        debug!(
            steps = self.config.steps,
            num_landmarks = self.config.num_landmarks,
            distance = self.config.distance,
            "sensing precondition passed"
        );

        let mut episode: u64 = 0;
        loop {
            episode += 1;
            if let Some(limit) = self.config.max_episodes {
                if episode > limit {
                    return Err(GenerateError::EpisodeLimit { limit });
                }
            }

            observer.on_episode_start(episode);
            match self.run_episode(episode, observer)? {
                Episode::Accepted { agent, dataset } => {
                    observer.on_accepted(episode, agent.position(), agent.landmarks(), &dataset);
                    return Ok(GeneratedData { dataset, agent, episodes: episode });
                }
                Episode::Incomplete { unseen } => {
                    observer.on_episode_rejected(episode, unseen);
                }
            }
        }
    }

    /// [`generate`][Self::generate] without callbacks.
    pub fn generate_silent(&mut self) -> GenerateResult<GeneratedData<A>> {
        self.generate(&mut NoopObserver)
    }

    /// Spawn a throwaway agent, place landmarks, and sense once.
    ///
    /// Catches agent models that cannot sense before the unbounded episode
    /// loop starts.
    pub fn check_sensing(&mut self) -> GenerateResult<()> {
        let mut probe = A::spawn(&self.config.world).map_err(GenerateError::Precondition)?;
        probe
            .place_landmarks(self.config.num_landmarks, &mut self.rng)
            .map_err(GenerateError::Precondition)?;
        probe.sense(&mut self.rng).map_err(GenerateError::Precondition)?;
        Ok(())
    }

    // ── Episode ───────────────────────────────────────────────────────────

    fn run_episode<O: GeneratorObserver>(
        &mut self,
        episode:  u64,
        observer: &mut O,
    ) -> GenerateResult<Episode<A>> {
        let num_landmarks = self.config.num_landmarks;
        let distance      = self.config.distance;

        let mut agent = A::spawn(&self.config.world)?;
        agent.place_landmarks(num_landmarks, &mut self.rng)?;

        let mut seen  = vec![false; num_landmarks];
        let mut steps = Vec::new();
        let (mut dx, mut dy) = heading_step(distance, &mut self.rng);

        for step in 0..self.config.records_per_episode() {
            let measurements = agent.sense(&mut self.rng)?;
            for m in &measurements {
                match seen.get_mut(m.landmark.index()) {
                    Some(slot) => *slot = true,
                    None => {
                        return Err(GenerateError::UnknownLandmark {
                            landmark: m.landmark,
                            num_landmarks,
                            episode,
                            step,
                        });
                    }
                }
            }

            let mut attempt: u64 = 0;
            while !agent.move_by(dx, dy, &mut self.rng) {
                attempt += 1;
                observer.on_move_rejected(episode, step, attempt);
                if let Some(limit) = self.config.max_move_retries {
                    if attempt >= limit {
                        return Err(GenerateError::MoveRetryLimit { limit, episode, step });
                    }
                }
                (dx, dy) = heading_step(distance, &mut self.rng);
            }

            let pos = agent.position();
            let record = Step {
                measurements,
                motion: Motion { dx, dy, x: pos.x, y: pos.y },
            };
            observer.on_step(episode, step, &record);
            steps.push(record);
        }

        let unseen = seen.iter().filter(|s| !**s).count();
        if unseen > 0 {
            return Ok(Episode::Incomplete { unseen });
        }
        Ok(Episode::Accepted { agent, dataset: Dataset::new(steps) })
    }
}

/// Displacement of length `distance` along a uniformly random heading.
fn heading_step<R: Randomness>(distance: f64, rng: &mut R) -> (f64, f64) {
    let theta = rng.uniform() * TAU;
    (theta.cos() * distance, theta.sin() * distance)
}
